//! serde support: a `DataUrl` serializes as its canonical URL string and
//! deserializes through the parser.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::DataUrl;

impl Serialize for DataUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url())
    }
}

impl<'de> Deserialize<'de> for DataUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DataUrl::from_url(&raw).map_err(de::Error::custom)
    }
}
