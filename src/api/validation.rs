use super::ApiError;

pub fn validate_uid(id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid id: {}. Id must be a positive integer",
            id
        )));
    }
    Ok(id)
}
