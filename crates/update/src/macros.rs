/// Generates an update document for one entity kind.
///
/// `fields` become [`crate::UpdateValue`]s with a `set_*` method,
/// `collections` become [`crate::CollectionUpdateValue`]s of object ids with
/// a `*_mut` accessor, and an optional `properties` map records property
/// changes by name. Only touched entries are written to the payload.
macro_rules! update_document {
    (
        $(#[doc = $doc:literal])*
        $name:ident($kind:ident, $id_wire:literal) {
            fields {
                $( $field:ident: $field_ty:ty = $field_wire:literal => $setter:ident, )*
            }
            collections {
                $( $collection:ident = $collection_wire:literal => $collection_mut:ident, )*
            }
            $( properties => $properties:ident; )?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            id: ::openbis_types::ObjectId,
            $( $field: $crate::UpdateValue<$field_ty>, )*
            $( $collection: $crate::CollectionUpdateValue<::openbis_types::ObjectId>, )*
            $( $properties: ::std::collections::BTreeMap<String, Option<String>>, )?
        }

        impl $name {
            pub const KIND: ::openbis_types::EntityKind = ::openbis_types::EntityKind::$kind;

            /// Start an update of the entity identified by `id`.
            pub fn new(id: ::openbis_types::ObjectId) -> $crate::UpdateResult<Self> {
                if id.kind() != Self::KIND {
                    return Err($crate::UpdateError::WrongIdKind {
                        document: stringify!($name),
                        expected: Self::KIND,
                        found: id.kind(),
                    });
                }
                Ok(Self {
                    id,
                    $( $field: Default::default(), )*
                    $( $collection: Default::default(), )*
                    $( $properties: Default::default(), )?
                })
            }

            pub fn id(&self) -> &::openbis_types::ObjectId {
                &self.id
            }

            $(
                pub fn $field(&self) -> &$crate::UpdateValue<$field_ty> {
                    &self.$field
                }

                #[doc = concat!("Set `", $field_wire, "`; `None` clears it.")]
                pub fn $setter(&mut self, value: Option<$field_ty>) -> &mut Self {
                    self.$field.set_value(value);
                    self
                }
            )*

            $(
                pub fn $collection(&self) -> &$crate::CollectionUpdateValue<::openbis_types::ObjectId> {
                    &self.$collection
                }

                pub fn $collection_mut(&mut self) -> &mut $crate::CollectionUpdateValue<::openbis_types::ObjectId> {
                    &mut self.$collection
                }
            )*

            $(
                /// Set a property; `None` removes its value. Properties that
                /// were never set are left as they are.
                pub fn set_property(&mut self, name: impl Into<String>, value: Option<String>) -> &mut Self {
                    self.$properties.insert(name.into(), value);
                    self
                }

                pub fn $properties(&self) -> &::std::collections::BTreeMap<String, Option<String>> {
                    &self.$properties
                }
            )?

            /// Whether anything besides the id would be sent.
            pub fn is_modified(&self) -> bool {
                false
                    $( || self.$field.is_modified() )*
                    $( || self.$collection.is_modified() )*
                    $( || !self.$properties.is_empty() )?
            }
        }

        impl ::openbis_schema::ToWire for $name {
            fn to_wire(&self, config: &::openbis_schema::WireConfig) -> ::serde_json::Value {
                let mut map = config.tagged(concat!(stringify!($kind), "Update"));
                map.insert($id_wire.to_string(), ::openbis_schema::ToWire::to_wire(&self.id, config));
                $( self.$field.write(&mut map, $field_wire, config); )*
                $( self.$collection.write(&mut map, $collection_wire, config); )*
                $(
                    if !self.$properties.is_empty() {
                        map.insert("properties".to_string(), ::openbis_schema::ToWire::to_wire(&self.$properties, config));
                    }
                )?
                ::tracing::trace!(kind = stringify!($kind), keys = map.len(), "encoded update document");
                ::serde_json::Value::Object(map)
            }
        }
    };
}
