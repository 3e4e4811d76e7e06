/// Equality predicates applied to the movie list query. Absent fields add no
/// predicate; present fields combine with AND.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

/// Field set for a movie insert. `id` is normally left unset so the store
/// assigns it.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Partial update: only present fields are written, the rest of the row is
/// left untouched. The primary key is not patchable.
#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl MoviePatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.trailer.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.genre_id.is_none()
            && self.director_id.is_none()
    }
}
