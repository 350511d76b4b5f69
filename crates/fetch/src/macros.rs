/// Generates a fetch options type from its relation table.
///
/// Each row `field: Nested = "wireName" => with_x, with_x_using, has_x;`
/// yields the get-or-create `with_x()`, the replacing `with_x_using()`, the
/// `has_x()` check and a `field()` accessor for the nested node.
macro_rules! fetch_options {
    (
        $(#[doc = $doc:literal])*
        $name:ident($kind:literal) {
            $(
                $field:ident: $target:ty = $wire:literal => $with:ident, $with_using:ident, $has:ident;
            )*
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Default, PartialEq)]
        pub struct $name {
            $( pub(crate) $field: Option<::std::sync::Arc<$target>>, )*
            sort: Option<$crate::SortSpec>,
            paging: $crate::Paging,
        }

        // Nested nodes are copied rather than shared, so `with_x()` on either
        // copy keeps handing out its own instance.
        impl Clone for $name {
            fn clone(&self) -> Self {
                Self {
                    $( $field: self.$field.as_deref().map(|nested| ::std::sync::Arc::new(nested.clone())), )*
                    sort: self.sort.clone(),
                    paging: self.paging,
                }
            }
        }

        impl $name {
            pub const KIND: &'static str = $kind;
            pub const RELATIONS: &'static [&'static str] = &[$($wire),*];

            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Request `", $wire, "`. The nested options are created on the first call; later calls return the same instance.")]
                pub fn $with(&mut self) -> &mut $target {
                    ::std::sync::Arc::make_mut(self.$field.get_or_insert_with(Default::default))
                }

                #[doc = concat!("Request `", $wire, "` with the given nested options, replacing any stored ones.")]
                pub fn $with_using(&mut self, options: $target) -> &mut Self {
                    self.$field = Some(::std::sync::Arc::new(options));
                    self
                }

                pub fn $has(&self) -> bool {
                    self.$field.is_some()
                }

                pub fn $field(&self) -> Option<&$target> {
                    self.$field.as_deref()
                }
            )*

            /// The sort specification of this node, created on first use.
            pub fn sort_by(&mut self) -> &mut $crate::SortSpec {
                self.sort.get_or_insert_with(|| $crate::SortSpec::new($kind))
            }

            pub fn sort(&self) -> Option<&$crate::SortSpec> {
                self.sort.as_ref()
            }

            /// Skip the first `from` results.
            pub fn from(&mut self, from: u32) -> &mut Self {
                self.paging.from = Some(from);
                self
            }

            /// Return at most `count` results.
            pub fn count(&mut self, count: u32) -> &mut Self {
                self.paging.count = Some(count);
                self
            }

            pub fn paging(&self) -> $crate::Paging {
                self.paging
            }
        }

        impl $crate::FetchOptionsNode for $name {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn relation_names(&self) -> &'static [&'static str] {
                Self::RELATIONS
            }

            fn has(&self, relation: &str) -> bool {
                match relation {
                    $( $wire => self.$has(), )*
                    _ => false,
                }
            }

            fn relation(&self, relation: &str) -> Option<&dyn $crate::FetchOptionsNode> {
                match relation {
                    $( $wire => self.$field().map(|node| node as &dyn $crate::FetchOptionsNode), )*
                    _ => None,
                }
            }

            fn with_relation(&mut self, relation: &str) -> Option<&mut dyn $crate::FetchOptionsNode> {
                match relation {
                    $( $wire => Some(self.$with() as &mut dyn $crate::FetchOptionsNode), )*
                    _ => None,
                }
            }

            fn sort(&self) -> Option<&$crate::SortSpec> {
                self.sort.as_ref()
            }

            fn sort_by(&mut self) -> &mut $crate::SortSpec {
                $name::sort_by(self)
            }

            fn paging(&self) -> $crate::Paging {
                self.paging
            }

            fn set_paging(&mut self, paging: $crate::Paging) {
                self.paging = paging;
            }
        }

        impl ::openbis_schema::ToWire for $name {
            fn to_wire(&self, config: &::openbis_schema::WireConfig) -> ::serde_json::Value {
                let mut map = config.tagged(concat!($kind, "FetchOptions"));
                $(
                    if let Some(nested) = &self.$field {
                        map.insert(
                            config.relation_key($wire).to_string(),
                            ::openbis_schema::ToWire::to_wire(nested.as_ref(), config),
                        );
                    }
                )*
                if let Some(sort) = &self.sort {
                    map.insert("sort".to_string(), ::openbis_schema::ToWire::to_wire(sort, config));
                }
                self.paging.write(&mut map);
                ::serde_json::Value::Object(map)
            }
        }

        impl ::openbis_schema::FromWire for $name {
            fn from_wire(
                value: &::serde_json::Value,
                config: &::openbis_schema::WireConfig,
            ) -> Result<Self, ::openbis_schema::WireError> {
                let map = config.expect_type(value, concat!($kind, "FetchOptions"))?;
                let present = |key: &str| map.get(key).filter(|nested| !nested.is_null());
                let mut options = Self::default();
                $(
                    if let Some(nested) = present(config.relation_key($wire)) {
                        options.$field = Some(::std::sync::Arc::new(
                            <$target as ::openbis_schema::FromWire>::from_wire(nested, config)?,
                        ));
                    }
                )*
                if let Some(sort) = present("sort") {
                    options.sort = Some($crate::SortSpec::decode(sort, $kind, config)?);
                }
                if let Some(from) = present("from") {
                    options.paging.from = Some($crate::node::paging_value(from, "from")?);
                }
                if let Some(count) = present("count") {
                    options.paging.count = Some($crate::node::paging_value(count, "count")?);
                }

                for key in map.keys() {
                    let known = key == config.type_key()
                        || key == config.reference_key()
                        || matches!(key.as_str(), "sort" | "from" | "count")
                        || Self::RELATIONS
                            .iter()
                            .any(|relation| config.relation_key(relation) == key.as_str());
                    if !known {
                        ::tracing::warn!(kind = $kind, key = key.as_str(), "ignoring unknown fetch option");
                    }
                }
                Ok(options)
            }
        }
    };
}

/// Generates an entity bound to the fetch options it was decoded with.
///
/// `attributes` are always readable. Reading anything listed under `one`,
/// `many` or `fetched` first checks the matching `has_*` method of the
/// fetch options and fails with [`crate::NotFetchedError`] when the relation
/// was not requested. The relation idents under `one` and `many` must match
/// the field names of the fetch options type.
macro_rules! entity {
    (
        $(#[doc = $doc:literal])*
        $name:ident($kind:literal): $options:ident {
            attributes {
                $( $attr:ident: $attr_ty:ty = $attr_wire:literal, )*
            }
            one {
                $( $one:ident: $one_ty:ty = $one_wire:literal => $one_has:ident, )*
            }
            many {
                $( $many:ident: $many_ty:ty = $many_wire:literal => $many_has:ident, )*
            }
            fetched {
                $( $fetched:ident: $fetched_ty:ty = $fetched_wire:literal => $fetched_has:ident, )*
            }
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            fetch_options: ::std::sync::Arc<$options>,
            $( $attr: Option<$attr_ty>, )*
            $( $one: Option<Box<$one_ty>>, )*
            $( $many: Vec<$many_ty>, )*
            $( $fetched: $fetched_ty, )*
        }

        impl $name {
            /// The fetch options this entity was retrieved with.
            pub fn fetch_options(&self) -> &$options {
                &self.fetch_options
            }

            $(
                pub fn $attr(&self) -> Option<&$attr_ty> {
                    self.$attr.as_ref()
                }
            )*

            $(
                pub fn $one(&self) -> Result<Option<&$one_ty>, $crate::NotFetchedError> {
                    $crate::ensure_fetched(self.fetch_options.$one_has(), $kind, $one_wire)?;
                    Ok(self.$one.as_deref())
                }
            )*

            $(
                pub fn $many(&self) -> Result<&[$many_ty], $crate::NotFetchedError> {
                    $crate::ensure_fetched(self.fetch_options.$many_has(), $kind, $many_wire)?;
                    Ok(&self.$many)
                }
            )*

            $(
                pub fn $fetched(&self) -> Result<&$fetched_ty, $crate::NotFetchedError> {
                    $crate::ensure_fetched(self.fetch_options.$fetched_has(), $kind, $fetched_wire)?;
                    Ok(&self.$fetched)
                }
            )*
        }

        impl $crate::Entity for $name {
            type Options = $options;
            const KIND: &'static str = $kind;

            fn decode(
                value: &::serde_json::Value,
                options: ::std::sync::Arc<$options>,
                context: &$crate::DecodeContext<'_>,
            ) -> Result<Self, ::openbis_schema::WireError> {
                let config = context.config();
                let value = context.resolve(value)?;
                let map = config.expect_type(value, $kind)?;

                Ok(Self {
                    $( $attr: ::openbis_schema::optional_field::<$attr_ty>(map, $attr_wire, config)?, )*
                    $( $one: $crate::decode::decode_one(map, config.relation_key($one_wire), options.$one.clone(), context)?, )*
                    $( $many: $crate::decode::decode_many(map, config.relation_key($many_wire), options.$many.clone(), context)?, )*
                    $(
                        $fetched: if options.$fetched_has() {
                            ::openbis_schema::optional_field::<$fetched_ty>(map, $fetched_wire, config)?.unwrap_or_default()
                        } else {
                            Default::default()
                        },
                    )*
                    fetch_options: options,
                })
            }
        }
    };
}
