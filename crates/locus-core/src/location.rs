//! Location entity, its `Direction` sub-record, input DTOs and the
//! flattened read model, with explicit field-by-field mapping between them.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::id::generate_id;

/// A stored location record.
///
/// The identifier is generated on creation and never changes afterwards.
/// All other attributes are required, non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub street_address: String,
    pub postal_code: String,
    pub city_name: String,
    /// Reference to an external map identifier.
    pub map_id: String,
    /// Optional free-text travel directions. Shares the location's
    /// identifier and is removed together with it.
    pub direction: Option<Direction>,
}

/// Free-text travel directions attached to a location. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub car: Option<String>,
    pub metro: Option<String>,
    pub bus: Option<String>,
}

impl Direction {
    /// Returns `true` when no direction text is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.car.is_none() && self.metro.is_none() && self.bus.is_none()
    }
}

/// The flattened location shape served to clients: the entity's attributes
/// with the direction sub-record pulled up into three optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub id: String,
    pub name: String,
    pub street_address: String,
    pub postal_code: String,
    pub city_name: String,
    pub map_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_direction: Option<String>,
}

/// Input for creating a location. The identifier is generated server-side.
///
/// Every field defaults when absent from the wire so a missing attribute
/// reaches [`NewLocation::validate`] as an empty string and is reported
/// as bad input, instead of failing at the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub map_id: String,
    #[serde(default)]
    pub car_direction: Option<String>,
    #[serde(default)]
    pub metro_direction: Option<String>,
    #[serde(default)]
    pub bus_direction: Option<String>,
}

/// Input for updating a location in place. Every field except the
/// identifier is replaceable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub map_id: String,
    #[serde(default)]
    pub car_direction: Option<String>,
    #[serde(default)]
    pub metro_direction: Option<String>,
    #[serde(default)]
    pub bus_direction: Option<String>,
}

fn require(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::missing_field(field));
    }
    Ok(())
}

fn direction_from_parts(
    car: Option<String>,
    metro: Option<String>,
    bus: Option<String>,
) -> Option<Direction> {
    let direction = Direction { car, metro, bus };
    if direction.is_empty() {
        None
    } else {
        Some(direction)
    }
}

impl NewLocation {
    /// Checks that every required attribute is a non-empty string.
    pub fn validate(&self) -> Result<(), InputError> {
        require("name", &self.name)?;
        require("streetAddress", &self.street_address)?;
        require("postalCode", &self.postal_code)?;
        require("cityName", &self.city_name)?;
        require("mapId", &self.map_id)?;
        Ok(())
    }
}

impl LocationUpdate {
    /// Checks the identifier and every required attribute.
    pub fn validate(&self) -> Result<(), InputError> {
        require("id", &self.id)?;
        require("name", &self.name)?;
        require("streetAddress", &self.street_address)?;
        require("postalCode", &self.postal_code)?;
        require("cityName", &self.city_name)?;
        require("mapId", &self.map_id)?;
        Ok(())
    }
}

impl Location {
    /// Builds a new entity from a create DTO, generating a fresh identifier.
    #[must_use]
    pub fn from_new(input: NewLocation) -> Self {
        Self {
            id: generate_id(),
            name: input.name,
            street_address: input.street_address,
            postal_code: input.postal_code,
            city_name: input.city_name,
            map_id: input.map_id,
            direction: direction_from_parts(
                input.car_direction,
                input.metro_direction,
                input.bus_direction,
            ),
        }
    }

    /// Builds the replacement entity for an update DTO, keeping its identifier.
    #[must_use]
    pub fn from_update(input: LocationUpdate) -> Self {
        Self {
            id: input.id,
            name: input.name,
            street_address: input.street_address,
            postal_code: input.postal_code,
            city_name: input.city_name,
            map_id: input.map_id,
            direction: direction_from_parts(
                input.car_direction,
                input.metro_direction,
                input.bus_direction,
            ),
        }
    }
}

impl LocationView {
    /// Flattens an entity into the client-facing shape.
    #[must_use]
    pub fn from_location(entity: &Location) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            street_address: entity.street_address.clone(),
            postal_code: entity.postal_code.clone(),
            city_name: entity.city_name.clone(),
            map_id: entity.map_id.clone(),
            car_direction: entity.direction.as_ref().and_then(|d| d.car.clone()),
            metro_direction: entity.direction.as_ref().and_then(|d| d.metro.clone()),
            bus_direction: entity.direction.as_ref().and_then(|d| d.bus.clone()),
        }
    }
}

impl From<&Location> for LocationView {
    fn from(entity: &Location) -> Self {
        Self::from_location(entity)
    }
}
