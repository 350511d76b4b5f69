use crate::{
    CriteriaError, CriteriaResult, DateMatcher, DateTimeZone, Field, IntoDateValue, Matcher,
    NumberMatcher, Numeric, StringMatcher,
};
use openbis_schema::WireEnum;
use openbis_types::EntityKind;
use std::fmt;

/// How the children of a composite are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    And,
    Or,
}

impl WireEnum for Operator {
    const TYPE: &'static str = "SearchOperator";

    fn wire_name(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }

    fn from_wire_name(name: &str) -> Option<Operator> {
        match name {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::And => "and",
            Operator::Or => "or",
        })
    }
}

/// The relation through which a nested group reaches other entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Parents,
    Children,
    Container,
    Components,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Parents, Role::Children, Role::Container, Role::Components];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Parents => "Parents",
            Role::Children => "Children",
            Role::Container => "Container",
            Role::Components => "Components",
        }
    }
}

/// Names the entities a composite group talks about, e.g. the samples
/// themselves (`SampleSearchCriteria`) or their parents
/// (`SampleParentsSearchCriteria`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    pub entity: EntityKind,
    pub role: Option<Role>,
}

impl Scope {
    pub fn entity(entity: EntityKind) -> Self {
        Self { entity, role: None }
    }

    pub fn related(entity: EntityKind, role: Role) -> Self {
        Self {
            entity,
            role: Some(role),
        }
    }

    /// Type tag of the scoped group.
    pub fn tag(&self) -> String {
        format!(
            "{}{}SearchCriteria",
            self.entity.name(),
            self.role.map(|role| role.name()).unwrap_or_default()
        )
    }

    pub(crate) fn from_tag(tag: &str) -> Option<Scope> {
        let name = tag.strip_suffix("SearchCriteria")?;
        if let Ok(entity) = name.parse::<EntityKind>() {
            return Some(Scope::entity(entity));
        }
        Role::ALL.into_iter().find_map(|role| {
            let entity = name.strip_suffix(role.name())?.parse::<EntityKind>().ok()?;
            Some(Scope::related(entity, role))
        })
    }
}

/// A single field test.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafCriterion {
    field: Field,
    matcher: Matcher,
}

impl LeafCriterion {
    /// Pair a field with a matcher of the same value kind.
    pub fn new(field: Field, matcher: impl Into<Matcher>) -> CriteriaResult<Self> {
        let matcher = matcher.into();
        if field.value_kind() != matcher.kind() {
            return Err(CriteriaError::MatcherMismatch {
                field: field.to_string(),
                expected: field.value_kind(),
                matcher: matcher.kind(),
            });
        }
        Ok(Self { field, matcher })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

/// A predicate tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Leaf(LeafCriterion),
    Composite(CompositeCriterion),
}

impl From<LeafCriterion> for Criterion {
    fn from(leaf: LeafCriterion) -> Self {
        Criterion::Leaf(leaf)
    }
}

impl From<CompositeCriterion> for Criterion {
    fn from(composite: CompositeCriterion) -> Self {
        Criterion::Composite(composite)
    }
}

impl Criterion {
    pub fn as_leaf(&self) -> Option<&LeafCriterion> {
        match self {
            Criterion::Leaf(leaf) => Some(leaf),
            Criterion::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeCriterion> {
        match self {
            Criterion::Composite(composite) => Some(composite),
            Criterion::Leaf(_) => None,
        }
    }

    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeCriterion> {
        match self {
            Criterion::Composite(composite) => Some(composite),
            Criterion::Leaf(_) => None,
        }
    }

    /// This criterion as a group. A leaf is first replaced by an AND group
    /// holding it, which matches the same entities.
    pub fn group_mut(&mut self) -> &mut CompositeCriterion {
        match self {
            Criterion::Composite(composite) => composite,
            Criterion::Leaf(_) => {
                let leaf = std::mem::replace(self, Criterion::Composite(CompositeCriterion::new()));
                let group = self.group_mut();
                group.criteria.push(leaf);
                group
            }
        }
    }
}

/// An ordered group of criteria joined by one operator.
///
/// Child order carries no meaning for matching; it is kept so payloads and
/// debug output are reproducible. An empty group is legal and leaves the
/// decision to the server (which treats it as "match everything").
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeCriterion {
    scope: Option<Scope>,
    operator: Operator,
    criteria: Vec<Criterion>,
}

impl CompositeCriterion {
    /// An unscoped AND group.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unscoped OR group.
    pub fn or() -> Self {
        Self {
            operator: Operator::Or,
            ..Self::default()
        }
    }

    /// The top-level group of a search for entities of `kind`.
    pub fn entity(kind: EntityKind) -> Self {
        Self::scoped(Scope::entity(kind))
    }

    pub fn scoped(scope: Scope) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn with_operator(&mut self, operator: Operator) -> &mut Self {
        self.operator = operator;
        self
    }

    pub fn with_and_operator(&mut self) -> &mut Self {
        self.with_operator(Operator::And)
    }

    pub fn with_or_operator(&mut self) -> &mut Self {
        self.with_operator(Operator::Or)
    }

    /// Append a criterion and return it for further building.
    pub fn add_criterion(&mut self, criterion: impl Into<Criterion>) -> &mut Criterion {
        let index = self.criteria.len();
        self.criteria.push(criterion.into());
        &mut self.criteria[index]
    }

    fn push_leaf(&mut self, leaf: LeafCriterion) -> &mut Self {
        self.criteria.push(Criterion::Leaf(leaf));
        self
    }

    fn push_composite(&mut self, composite: CompositeCriterion) -> &mut CompositeCriterion {
        self.add_criterion(composite).group_mut()
    }

    pub fn with_code(&mut self) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::Code)
    }

    pub fn with_perm_id(&mut self) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::PermId)
    }

    pub fn with_identifier(&mut self) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::Identifier)
    }

    pub fn with_type(&mut self) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::Type)
    }

    pub fn with_property(&mut self, name: impl Into<String>) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::Property(name.into()))
    }

    pub fn with_any_property(&mut self) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::AnyProperty)
    }

    pub fn with_any_field(&mut self) -> StringFieldBuilder<'_> {
        StringFieldBuilder::new(self, Field::AnyField)
    }

    pub fn with_number_property(&mut self, name: impl Into<String>) -> NumberFieldBuilder<'_> {
        NumberFieldBuilder {
            parent: self,
            field: Field::NumberProperty(name.into()),
        }
    }

    pub fn with_date_property(&mut self, name: impl Into<String>) -> DateFieldBuilder<'_> {
        DateFieldBuilder::new(self, Field::DateProperty(name.into()))
    }

    pub fn with_registration_date(&mut self) -> DateFieldBuilder<'_> {
        DateFieldBuilder::new(self, Field::RegistrationDate)
    }

    pub fn with_modification_date(&mut self) -> DateFieldBuilder<'_> {
        DateFieldBuilder::new(self, Field::ModificationDate)
    }

    /// A nested group over related entities.
    pub fn with_sub_criteria(&mut self, scope: Scope) -> &mut CompositeCriterion {
        self.push_composite(CompositeCriterion::scoped(scope))
    }

    /// A nested, unscoped AND group.
    pub fn with_and(&mut self) -> &mut CompositeCriterion {
        self.push_composite(CompositeCriterion::new())
    }

    /// A nested, unscoped OR group.
    pub fn with_or(&mut self) -> &mut CompositeCriterion {
        self.push_composite(CompositeCriterion::or())
    }

    pub fn with_space(&mut self) -> &mut CompositeCriterion {
        self.with_sub_criteria(Scope::entity(EntityKind::Space))
    }

    pub fn with_project(&mut self) -> &mut CompositeCriterion {
        self.with_sub_criteria(Scope::entity(EntityKind::Project))
    }

    pub fn with_experiment(&mut self) -> &mut CompositeCriterion {
        self.with_sub_criteria(Scope::entity(EntityKind::Experiment))
    }

    pub fn with_sample(&mut self) -> &mut CompositeCriterion {
        self.with_sub_criteria(Scope::entity(EntityKind::Sample))
    }

    /// Parents of the entities this group is scoped to. Unscoped groups
    /// are taken to talk about samples.
    pub fn with_parents(&mut self) -> &mut CompositeCriterion {
        self.with_related(Role::Parents)
    }

    pub fn with_children(&mut self) -> &mut CompositeCriterion {
        self.with_related(Role::Children)
    }

    pub fn with_container(&mut self) -> &mut CompositeCriterion {
        self.with_related(Role::Container)
    }

    pub fn with_components(&mut self) -> &mut CompositeCriterion {
        self.with_related(Role::Components)
    }

    fn with_related(&mut self, role: Role) -> &mut CompositeCriterion {
        let entity = self
            .scope
            .map(|scope| scope.entity)
            .unwrap_or(EntityKind::Sample);
        self.with_sub_criteria(Scope::related(entity, role))
    }

    pub(crate) fn from_parts(
        scope: Option<Scope>,
        operator: Operator,
        criteria: Vec<Criterion>,
    ) -> Self {
        Self {
            scope,
            operator,
            criteria,
        }
    }
}

/// Builds a leaf on a string field; finish with one of the `that_*` methods.
pub struct StringFieldBuilder<'a> {
    parent: &'a mut CompositeCriterion,
    field: Field,
    wildcards: bool,
}

impl<'a> StringFieldBuilder<'a> {
    fn new(parent: &'a mut CompositeCriterion, field: Field) -> Self {
        Self {
            parent,
            field,
            wildcards: false,
        }
    }

    pub fn with_wildcards(mut self) -> Self {
        self.wildcards = true;
        self
    }

    pub fn without_wildcards(mut self) -> Self {
        self.wildcards = false;
        self
    }

    fn finish(self, matcher: StringMatcher) -> &'a mut CompositeCriterion {
        let matcher = if self.wildcards {
            matcher.with_wildcards()
        } else {
            matcher
        };
        self.parent.push_leaf(LeafCriterion {
            field: self.field,
            matcher: Matcher::String(matcher),
        })
    }

    pub fn that_equals(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::equals(value))
    }

    pub fn that_starts_with(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::starts_with(value))
    }

    pub fn that_ends_with(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::ends_with(value))
    }

    pub fn that_contains(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::contains(value))
    }

    pub fn that_is_less_than(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::less_than(value))
    }

    pub fn that_is_less_than_or_equal_to(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::less_or_equal(value))
    }

    pub fn that_is_greater_than(self, value: impl Into<String>) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::greater_than(value))
    }

    pub fn that_is_greater_than_or_equal_to(
        self,
        value: impl Into<String>,
    ) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::greater_or_equal(value))
    }

    pub fn that_matches_anything(self) -> &'a mut CompositeCriterion {
        self.finish(StringMatcher::any())
    }
}

pub struct NumberFieldBuilder<'a> {
    parent: &'a mut CompositeCriterion,
    field: Field,
}

impl<'a> NumberFieldBuilder<'a> {
    fn push(self, matcher: NumberMatcher) -> &'a mut CompositeCriterion {
        self.parent.push_leaf(LeafCriterion {
            field: self.field,
            matcher: Matcher::Number(matcher),
        })
    }

    fn finish(
        self,
        matcher: CriteriaResult<NumberMatcher>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        Ok(self.push(matcher?))
    }

    pub fn that_equals(
        self,
        value: impl Into<Numeric>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(NumberMatcher::equals(value))
    }

    pub fn that_is_less_than(
        self,
        value: impl Into<Numeric>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(NumberMatcher::less_than(value))
    }

    pub fn that_is_less_than_or_equal_to(
        self,
        value: impl Into<Numeric>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(NumberMatcher::less_or_equal(value))
    }

    pub fn that_is_greater_than(
        self,
        value: impl Into<Numeric>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(NumberMatcher::greater_than(value))
    }

    pub fn that_is_greater_than_or_equal_to(
        self,
        value: impl Into<Numeric>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(NumberMatcher::greater_or_equal(value))
    }

    pub fn that_matches_anything(self) -> &'a mut CompositeCriterion {
        self.push(NumberMatcher::any())
    }
}

/// Builds a leaf on a date field. Literal values are validated before
/// anything is added to the parent group.
pub struct DateFieldBuilder<'a> {
    parent: &'a mut CompositeCriterion,
    field: Field,
    time_zone: Option<DateTimeZone>,
}

impl<'a> DateFieldBuilder<'a> {
    fn new(parent: &'a mut CompositeCriterion, field: Field) -> Self {
        Self {
            parent,
            field,
            time_zone: None,
        }
    }

    pub fn with_time_zone(mut self, hour_offset: i32) -> Self {
        self.time_zone = Some(DateTimeZone::Offset(hour_offset));
        self
    }

    pub fn with_server_time_zone(mut self) -> Self {
        self.time_zone = Some(DateTimeZone::Server);
        self
    }

    fn finish(
        self,
        matcher: CriteriaResult<DateMatcher>,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        let mut matcher = matcher?;
        matcher = match self.time_zone {
            Some(DateTimeZone::Server) => matcher.with_server_time_zone(),
            Some(DateTimeZone::Offset(hours)) => matcher.with_time_zone(hours),
            None => matcher,
        };
        Ok(self.parent.push_leaf(LeafCriterion {
            field: self.field,
            matcher: Matcher::Date(matcher),
        }))
    }

    pub fn that_equals(self, value: impl IntoDateValue) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(DateMatcher::equals(value))
    }

    pub fn that_is_earlier_than(
        self,
        value: impl IntoDateValue,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(DateMatcher::earlier_than(value))
    }

    pub fn that_is_earlier_than_or_equal_to(
        self,
        value: impl IntoDateValue,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(DateMatcher::earlier_or_equal(value))
    }

    pub fn that_is_later_than(
        self,
        value: impl IntoDateValue,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(DateMatcher::later_than(value))
    }

    pub fn that_is_later_than_or_equal_to(
        self,
        value: impl IntoDateValue,
    ) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(DateMatcher::later_or_equal(value))
    }

    pub fn that_matches_anything(self) -> CriteriaResult<&'a mut CompositeCriterion> {
        self.finish(Ok(DateMatcher::any()))
    }
}
