use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Body of a successful `POST /api/extract`
///
/// A collection that is missing or `null` decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoices: Vec<Invoice>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub customers: Vec<Customer>,
}

/// A single record field, kept as the extractor sent it.
///
/// The service is not strict about types: spreadsheet serial numbers arrive
/// as integers, LLM answers put quantities in strings. Any scalar is
/// accepted and stored verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// `null`, missing, or a boolean
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(_) => FieldValue::Empty,
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(n.to_string())),
            // Arrays and objects are shown as their JSON text
            other => FieldValue::Text(other.to_string()),
        })
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Empty => serializer.serialize_none(),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// One invoice line as returned by the extractor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub serial_number: FieldValue,
    pub customer_name: FieldValue,
    pub product_name: FieldValue,
    pub quantity: FieldValue,
    pub tax: FieldValue,
    pub total_amount: FieldValue,
    pub date: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub name: FieldValue,
    pub quantity: FieldValue,
    pub unit_price: FieldValue,
    pub tax: FieldValue,
    pub price_with_tax: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub name: FieldValue,
    /// Often absent on scanned invoices
    pub phone: FieldValue,
    pub total_purchase_amount: FieldValue,
}

// The extractor emits `null` for collections it found nothing for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
