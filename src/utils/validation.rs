use crate::domain::model::Bounds;
use crate::utils::error::{Result, RobotError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RobotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RobotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_axis(field_name: &str, min: i32, max: i32) -> Result<()> {
    if min > max {
        return Err(RobotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", min, max),
            reason: "Minimum must not exceed maximum".to_string(),
        });
    }
    Ok(())
}

pub fn validate_bounds(bounds: &Bounds) -> Result<()> {
    validate_axis("grid.x", bounds.min_x, bounds.max_x)?;
    validate_axis("grid.y", bounds.min_y, bounds.max_y)?;
    Ok(())
}

impl Validate for Bounds {
    fn validate(&self) -> Result<()> {
        validate_bounds(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.path", "state.json").is_ok());
        assert!(validate_path("store.path", "   ").is_err());
        assert!(validate_path("store.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_bounds_rejects_inverted_axis() {
        assert!(Bounds::default().validate().is_ok());
        assert!(Bounds::new(0, 0, 0, 0).validate().is_ok());

        let err = Bounds::new(3, 2, 0, 5).validate().unwrap_err();
        match err {
            RobotError::InvalidConfigValueError { field, .. } => assert_eq!(field, "grid.x"),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(Bounds::new(0, 5, 6, 5).validate().is_err());
    }
}
