//! Debug rendering of criteria trees as nested function calls.

use crate::{CompositeCriterion, Criterion, DateTimeZone, LeafCriterion, Matcher};
use itertools::Itertools;
use std::fmt;

fn escape_string(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.comparison().function_name();
        match self {
            Matcher::String(m) => {
                write!(f, "{}({})", name, m.value().map(escape_string).unwrap_or_default())?;
                if m.uses_wildcards() {
                    f.write_str(".wildcards()")?;
                }
                Ok(())
            }
            Matcher::Number(m) => write!(
                f,
                "{}({})",
                name,
                m.value().map(|v| v.to_string()).unwrap_or_default()
            ),
            Matcher::Date(m) => {
                write!(
                    f,
                    "{}({})",
                    name,
                    m.value().map(|v| v.to_string()).unwrap_or_default()
                )?;
                match m.time_zone() {
                    Some(DateTimeZone::Server) => f.write_str(".server_time_zone()"),
                    Some(DateTimeZone::Offset(hours)) => write!(f, ".time_zone({:+})", hours),
                    None => Ok(()),
                }
            }
        }
    }
}

impl fmt::Display for LeafCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.field(), self.matcher())
    }
}

impl fmt::Display for CompositeCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = format!("{}({})", self.operator(), self.criteria().iter().join(", "));
        match self.scope() {
            Some(scope) => write!(
                f,
                "{}{}({})",
                scope.entity,
                scope.role.map(|role| role.name()).unwrap_or_default(),
                body
            ),
            None => f.write_str(&body),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Leaf(leaf) => leaf.fmt(f),
            Criterion::Composite(composite) => composite.fmt(f),
        }
    }
}
