use openbis_schema::{
    as_object, enum_from_wire, enum_to_wire, required_field, FromWire, ToWire, WireConfig,
    WireEnum, WireError,
};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl WireEnum for SortOrder {
    const TYPE: &'static str = "SortOrder";

    fn wire_name(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Ordering on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorting {
    field: String,
    order: SortOrder,
}

impl Sorting {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn asc(&mut self) -> &mut Self {
        self.order = SortOrder::Asc;
        self
    }

    pub fn desc(&mut self) -> &mut Self {
        self.order = SortOrder::Desc;
        self
    }
}

/// Ordering of the results for one fetch options node.
///
/// Each field is listed once; asking for a field again returns the
/// existing sorting. Earlier fields take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    kind: &'static str,
    sortings: Vec<Sorting>,
}

impl SortSpec {
    pub const CODE: &'static str = "CODE";
    pub const PERM_ID: &'static str = "PERM_ID";
    pub const IDENTIFIER: &'static str = "IDENTIFIER";
    pub const TYPE: &'static str = "TYPE";
    pub const REGISTRATION_DATE: &'static str = "REGISTRATION_DATE";
    pub const MODIFICATION_DATE: &'static str = "MODIFICATION_DATE";
    pub const PROPERTY: &'static str = "PROPERTY";

    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            sortings: Vec::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn sortings(&self) -> &[Sorting] {
        &self.sortings
    }

    pub fn get(&self, field: &str) -> Option<&Sorting> {
        self.sortings.iter().find(|s| s.field == field)
    }

    /// Get-or-create the sorting on `field`.
    pub fn field(&mut self, field: impl Into<String>) -> &mut Sorting {
        let field = field.into();
        let index = match self.sortings.iter().position(|s| s.field == field) {
            Some(index) => index,
            None => {
                self.sortings.push(Sorting {
                    field,
                    order: SortOrder::default(),
                });
                self.sortings.len() - 1
            }
        };
        &mut self.sortings[index]
    }

    pub fn code(&mut self) -> &mut Sorting {
        self.field(Self::CODE)
    }

    pub fn perm_id(&mut self) -> &mut Sorting {
        self.field(Self::PERM_ID)
    }

    pub fn identifier(&mut self) -> &mut Sorting {
        self.field(Self::IDENTIFIER)
    }

    pub fn entity_type(&mut self) -> &mut Sorting {
        self.field(Self::TYPE)
    }

    pub fn registration_date(&mut self) -> &mut Sorting {
        self.field(Self::REGISTRATION_DATE)
    }

    pub fn modification_date(&mut self) -> &mut Sorting {
        self.field(Self::MODIFICATION_DATE)
    }

    pub fn property(&mut self, name: &str) -> &mut Sorting {
        self.field(format!("{}{}", Self::PROPERTY, name))
    }

    fn tag(kind: &str) -> String {
        format!("{}SortOptions", kind)
    }

    pub(crate) fn decode(
        value: &Value,
        kind: &'static str,
        config: &WireConfig,
    ) -> Result<Self, WireError> {
        let tag = Self::tag(kind);
        let map = config.expect_type(value, &tag)?;
        let mut spec = SortSpec::new(kind);

        let items = match map.get("sortings") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(Value::Null) | None => &[][..],
            Some(other) => return Err(WireError::invalid("sortings", other.to_string())),
        };
        for item in items {
            let sorting = as_object(item)?;
            let field = String::from_wire(required_field(sorting, "Sorting", "field")?, config)?;
            let order = match sorting.get("order").filter(|v| !v.is_null()) {
                Some(order) => enum_from_wire::<SortOrder>(order, config)?,
                None => SortOrder::default(),
            };
            spec.field(field).order = order;
        }

        Ok(spec)
    }
}

impl ToWire for SortSpec {
    fn to_wire(&self, config: &WireConfig) -> Value {
        let mut map = config.tagged(&Self::tag(self.kind));
        let sortings = self
            .sortings
            .iter()
            .map(|sorting| {
                let mut item = config.tagged("Sorting");
                item.insert("field".to_string(), json!(sorting.field));
                item.insert("order".to_string(), enum_to_wire(sorting.order, config));
                Value::Object(item)
            })
            .collect();
        map.insert("sortings".to_string(), Value::Array(sortings));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sortings_are_get_or_create() {
        let mut spec = SortSpec::new("Sample");
        spec.code().desc();
        spec.registration_date();
        spec.code();

        assert_eq!(spec.sortings().len(), 2);
        assert_eq!(spec.get("CODE").unwrap().order(), SortOrder::Desc);
        assert_eq!(spec.get("REGISTRATION_DATE").unwrap().order(), SortOrder::Asc);
    }

    #[test]
    fn test_sort_wire_form() {
        let config = WireConfig::default();
        let mut spec = SortSpec::new("Sample");
        spec.property("COLOR").desc();

        let wire = spec.to_wire(&config);
        assert_eq!(
            wire,
            json!({
                "type": "SampleSortOptions",
                "sortings": [{
                    "type": "Sorting",
                    "field": "PROPERTYCOLOR",
                    "order": {"type": "SortOrder", "value": "DESC"}
                }]
            })
        );
        assert_eq!(SortSpec::decode(&wire, "Sample", &config).unwrap(), spec);
        assert!(SortSpec::decode(&wire, "DataSet", &config).is_err());
    }
}
