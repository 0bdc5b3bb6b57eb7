use crate::error::{CardError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Everything a card needs to know about one item for sale.
#[derive(PartialEq, Clone, Debug)]
pub struct CardAttributes {
    /// Opaque key used to build the navigation target.
    pub identifier: String,
    pub name: String,
    pub image_src: String,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl CardAttributes {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: f64,
        release_date: DateTime<Utc>,
        num_of_colors: u32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// The sale price, if it is one we can actually show.
    pub fn valid_sale_price(&self) -> Option<f64> {
        self.sale_price.filter(|price| price.is_finite())
    }

    /// Checks the fields a card cannot be drawn without.
    ///
    /// Odd but well-typed values (negative prices, zero colors, release dates far in the
    /// future) pass through untouched.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.trim().is_empty() {
            return Err(CardError::invalid("identifier", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CardError::invalid("name", "must not be empty"));
        }
        if !self.price.is_finite() {
            return Err(CardError::invalid(
                "price",
                format!("expected a number, found {}", self.price),
            ));
        }
        Ok(())
    }
}

/// Loosely typed attributes, as they show up in a catalog file.
///
/// Nothing is checked until the value is converted into [`CardAttributes`].
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawCardAttributes {
    #[serde(alias = "identifier")]
    pub slug: Option<Value>,
    #[serde(alias = "displayName")]
    pub name: Option<Value>,
    #[serde(alias = "image")]
    pub image_src: Option<Value>,
    pub price: Option<Value>,
    pub sale_price: Option<Value>,
    #[serde(alias = "releaseTimestamp")]
    pub release_date: Option<Value>,
    #[serde(alias = "colorCount")]
    pub num_of_colors: Option<Value>,
}

impl TryFrom<RawCardAttributes> for CardAttributes {
    type Error = CardError;

    fn try_from(raw: RawCardAttributes) -> Result<Self> {
        let sale_price = match raw.sale_price {
            Some(value) => match value.as_f64() {
                Some(price) => Some(price),
                None => {
                    tracing::debug!("ignoring non-numeric sale price {value}");
                    None
                }
            },
            None => None,
        };

        let attributes = CardAttributes {
            identifier: required_string("identifier", raw.slug)?,
            name: required_string("name", raw.name)?,
            image_src: required_string("imageSrc", raw.image_src)?,
            price: required_number("price", raw.price)?,
            sale_price,
            release_date: release_date(raw.release_date)?,
            num_of_colors: color_count(raw.num_of_colors)?,
        };

        attributes.validate()?;
        Ok(attributes)
    }
}

fn required<'a>(field: &'static str, value: &'a Option<Value>) -> Result<&'a Value> {
    value
        .as_ref()
        .ok_or_else(|| CardError::invalid(field, "missing"))
}

fn required_string(field: &'static str, value: Option<Value>) -> Result<String> {
    match required(field, &value)? {
        Value::String(text) => Ok(text.clone()),
        other => Err(CardError::invalid(
            field,
            format!("expected a string, found {other}"),
        )),
    }
}

fn required_number(field: &'static str, value: Option<Value>) -> Result<f64> {
    let value = required(field, &value)?;
    value
        .as_f64()
        .ok_or_else(|| CardError::invalid(field, format!("expected a number, found {value}")))
}

/// Release dates are either epoch milliseconds or an RFC 3339 string.
fn release_date(value: Option<Value>) -> Result<DateTime<Utc>> {
    const FIELD: &str = "releaseDate";

    match required(FIELD, &value)? {
        Value::Number(millis) => millis
            .as_i64()
            .or_else(|| millis.as_f64().map(|ms| ms as i64))
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| CardError::invalid(FIELD, format!("timestamp {millis} is out of range"))),
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|err| CardError::invalid(FIELD, format!("`{text}` is not RFC 3339: {err}"))),
        other => Err(CardError::invalid(
            FIELD,
            format!("expected a timestamp, found {other}"),
        )),
    }
}

fn color_count(value: Option<Value>) -> Result<u32> {
    const FIELD: &str = "numOfColors";

    let value = required(FIELD, &value)?;
    value
        .as_u64()
        .and_then(|count| u32::try_from(count).ok())
        .ok_or_else(|| {
            CardError::invalid(FIELD, format!("expected a non-negative integer, found {value}"))
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<RawCardAttributes>),
    One(RawCardAttributes),
}

/// Parses a catalog: either a single attribute object or an array of them.
///
/// The first invalid item aborts the parse.
pub fn parse_catalog(json: &str) -> Result<Vec<CardAttributes>> {
    let raw = match serde_json::from_str::<CatalogFile>(json)? {
        CatalogFile::Many(items) => items,
        CatalogFile::One(item) => vec![item],
    };

    raw.into_iter().map(CardAttributes::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn raw(value: Value) -> RawCardAttributes {
        serde_json::from_value(value).unwrap()
    }

    fn full() -> Value {
        json!({
            "slug": "air-zoom",
            "name": "Air Zoom",
            "imageSrc": "/assets/air-zoom.jpg",
            "price": 150,
            "releaseDate": 1_600_000_000_000_i64,
            "numOfColors": 3,
        })
    }

    #[test]
    fn converts_catalog_fields() {
        let attrs = CardAttributes::try_from(raw(full())).unwrap();
        assert_eq!(attrs.identifier, "air-zoom");
        assert_eq!(attrs.price, 150.0);
        assert_eq!(attrs.sale_price, None);
        assert_eq!(
            attrs.release_date,
            Utc.timestamp_millis_opt(1_600_000_000_000).unwrap()
        );
        assert_eq!(attrs.num_of_colors, 3);
    }

    #[test]
    fn accepts_rfc3339_release_dates() {
        let mut value = full();
        value["releaseDate"] = json!("2024-03-01T12:00:00Z");
        let attrs = CardAttributes::try_from(raw(value)).unwrap();
        assert_eq!(
            attrs.release_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_identifier_is_invalid() {
        let mut value = full();
        value.as_object_mut().unwrap().remove("slug");
        let err = CardAttributes::try_from(raw(value)).unwrap_err();
        assert_eq!(err.field(), Some("identifier"));
    }

    #[test]
    fn blank_name_is_invalid() {
        let mut value = full();
        value["name"] = json!("   ");
        let err = CardAttributes::try_from(raw(value)).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn non_numeric_price_is_invalid() {
        let mut value = full();
        value["price"] = json!("150");
        let err = CardAttributes::try_from(raw(value)).unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn non_numeric_sale_price_means_no_sale() {
        let mut value = full();
        value["salePrice"] = json!("110");
        let attrs = CardAttributes::try_from(raw(value)).unwrap();
        assert_eq!(attrs.sale_price, None);

        let mut value = full();
        value["salePrice"] = Value::Null;
        let attrs = CardAttributes::try_from(raw(value)).unwrap();
        assert_eq!(attrs.sale_price, None);
    }

    #[test]
    fn negative_color_count_is_invalid() {
        let mut value = full();
        value["numOfColors"] = json!(-1);
        let err = CardAttributes::try_from(raw(value)).unwrap_err();
        assert_eq!(err.field(), Some("numOfColors"));
    }

    #[test]
    fn unusual_values_pass_validation() {
        let attrs = CardAttributes::new("x", "X", "", -5.0, Utc::now(), 0);
        assert!(attrs.validate().is_ok());
    }

    #[test]
    fn non_finite_sale_price_is_not_shown() {
        let attrs = CardAttributes::new("x", "X", "", 5.0, Utc::now(), 1).with_sale_price(f64::NAN);
        assert_eq!(attrs.valid_sale_price(), None);
    }

    #[test]
    fn catalog_accepts_object_or_array() {
        let one = parse_catalog(&full().to_string()).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_catalog(&json!([full(), full()]).to_string()).unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn catalog_surfaces_the_first_invalid_item() {
        let mut bad = full();
        bad["name"] = json!(42);
        let err = parse_catalog(&json!([full(), bad]).to_string()).unwrap_err();
        assert!(matches!(err, CardError::InvalidAttributes { field: "name", .. }));
    }
}
