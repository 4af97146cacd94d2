//! Address entity representing a named geographic point.

use crate::domain::geo::{GeoPoint, ValidationError};

/// A stored address.
///
/// The `id` is assigned by storage on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i64,
    pub name: String,
    pub location: GeoPoint,
}

impl Address {
    /// Creates a new Address instance.
    pub fn new(id: i64, name: String, location: GeoPoint) -> Self {
        Self { id, name, location }
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }
}

/// Input data for creating an address or replacing all of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub name: String,
    pub location: GeoPoint,
}

impl NewAddress {
    /// Builds validated address fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] for an empty name, or the
    /// coordinate error from [`GeoPoint::new`].
    pub fn new(name: String, latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let location = GeoPoint::new(latitude, longitude)?;
        Ok(Self { name, location })
    }

    /// Attaches a storage identifier.
    pub fn into_address(self, id: i64) -> Address {
        Address::new(id, self.name, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let location = GeoPoint::new(52.52, 13.405).unwrap();
        let address = Address::new(1, "Berlin".to_string(), location);

        assert_eq!(address.id, 1);
        assert_eq!(address.name, "Berlin");
        assert_eq!(address.latitude(), 52.52);
        assert_eq!(address.longitude(), 13.405);
    }

    #[test]
    fn test_new_address_valid() {
        let new_address = NewAddress::new("Office".to_string(), -33.0, 151.0).unwrap();

        assert_eq!(new_address.name, "Office");
        assert_eq!(new_address.location.latitude(), -33.0);
        assert_eq!(new_address.location.longitude(), 151.0);
    }

    #[test]
    fn test_new_address_empty_name() {
        assert_eq!(
            NewAddress::new(String::new(), 0.0, 0.0),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_new_address_whitespace_name_is_kept() {
        let new_address = NewAddress::new(" ".to_string(), 0.0, 0.0).unwrap();
        assert_eq!(new_address.name, " ");
    }

    #[test]
    fn test_new_address_invalid_coordinates() {
        assert!(matches!(
            NewAddress::new("x".to_string(), 95.0, 0.0),
            Err(ValidationError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            NewAddress::new("x".to_string(), 0.0, 200.0),
            Err(ValidationError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_into_address() {
        let address = NewAddress::new("Home".to_string(), 1.0, 2.0)
            .unwrap()
            .into_address(42);

        assert_eq!(address.id, 42);
        assert_eq!(address.name, "Home");
        assert_eq!(address.latitude(), 1.0);
    }
}
