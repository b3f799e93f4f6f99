use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use mongodb::bson::Bson;
use serde::{de::Error, Deserialize, Serialize};
use uuid::Uuid;

pub trait EntityMarker {
    fn prefix() -> &'static str;
}

pub struct EntityId<T: EntityMarker>(Uuid, PhantomData<T>);

impl<T: EntityMarker> EntityId<T> {
    pub fn new() -> EntityId<T> {
        EntityId(Uuid::new_v4(), PhantomData)
    }
}

impl<T: EntityMarker> Copy for EntityId<T> {}

impl<T: EntityMarker> Clone for EntityId<T> {
    fn clone(&self) -> EntityId<T> {
        *self
    }
}

impl<T: EntityMarker> PartialEq for EntityId<T> {
    fn eq(&self, other: &EntityId<T>) -> bool {
        self.0 == other.0
    }
}

impl<T: EntityMarker> Eq for EntityId<T> {}

impl<T: EntityMarker> Display for EntityId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{:X}", T::prefix(), self.0)
    }
}

impl<T: EntityMarker> Debug for EntityId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(self, f)
    }
}

impl<T: EntityMarker> FromStr for EntityId<T> {
    type Err = EntityIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s.find('-').ok_or(EntityIdParseError::InvalidFormat)?;
        let (prefix, id) = s.split_at(index);

        if prefix != T::prefix() {
            return Err(EntityIdParseError::InvalidPrefix);
        }

        let uuid = Uuid::from_str(&id[1..]).map_err(|_| EntityIdParseError::InvalidUuid)?;

        Ok(EntityId(uuid, PhantomData))
    }
}

impl<T: EntityMarker> Serialize for EntityId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de, T: EntityMarker> Deserialize<'de> for EntityId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntityId::from_str(&s).map_err(|e| D::Error::custom(e))
    }
}

impl<T: EntityMarker> From<EntityId<T>> for Bson {
    fn from(id: EntityId<T>) -> Bson {
        id.to_string().into()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityIdParseError {
    InvalidFormat,
    InvalidPrefix,
    InvalidUuid,
}

impl Display for EntityIdParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}
