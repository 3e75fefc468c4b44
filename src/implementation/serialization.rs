use crate::{api::capacity::Capacity, implementation::parsing::from_string};
use core::fmt;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Capacities serialize as their exact form, e.g. `"512*KiB"`.
impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_exact_string())
    }
}

struct CapacityVisitor;

impl Visitor<'_> for CapacityVisitor {
    type Value = Capacity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a capacity such as \"20*GiB\" or a number of bits")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Capacity, E> {
        from_string(value).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Capacity, E> {
        Ok(Capacity::new(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Capacity, E> {
        Ok(Capacity::new(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Capacity, E> {
        Ok(Capacity::new(value))
    }
}

/// Accepts either the string form or a raw number of bits.
impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CapacityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{capacity::Capacity, units::*};

    #[test]
    fn serializes_exact_form() {
        assert_eq!(serde_json::to_string(&(MIB * 0.5)).unwrap(), "\"512*KiB\"");
        assert_eq!(serde_json::to_string(&(BIT * 0.5)).unwrap(), "\"0.5*bit\"");
    }

    #[test]
    fn deserializes_strings_and_numbers() {
        let parsed: Capacity = serde_json::from_str("\"1119.63 * TB\"").unwrap();
        assert_eq!(parsed, GB * 1_119_630);

        let parsed: Vec<Capacity> = serde_json::from_str("[8, 8.0, \"MiB\"]").unwrap();
        assert_eq!(parsed, vec![BYTE, BYTE, MIB]);
    }

    #[test]
    fn rejects_unknown_units() {
        let error = serde_json::from_str::<Capacity>("\"2 GIB\"").unwrap_err();
        assert!(error.to_string().contains("Invalid capacity"));
    }
}
