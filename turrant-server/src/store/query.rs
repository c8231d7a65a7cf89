//! Select/update/delete selectors understood by every `TableClient`

use serde_json::Value;

/// Equality filter on a single column
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// PostgREST operand form, e.g. `eq.true`
    pub fn operand(&self) -> String {
        let raw = match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        format!("eq.{}", raw)
    }
}

/// Sort direction for a single-column ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    /// PostgREST form, e.g. `published_at.desc`
    pub fn param(&self) -> String {
        let dir = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        format!("{}.{}", self.column, dir)
    }
}

/// Row selector: equality filters, optional ordering, optional limit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction: Direction::Asc,
        });
        self
    }

    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction: Direction::Desc,
        });
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates() {
        let q = Query::new()
            .eq("slug", "hello")
            .eq("published", true)
            .order_desc("published_at")
            .limit(2);

        assert_eq!(q.filters.len(), 2);
        assert_eq!(q.filters[0].operand(), "eq.hello");
        assert_eq!(q.filters[1].operand(), "eq.true");
        assert_eq!(q.order.as_ref().map(Order::param).as_deref(), Some("published_at.desc"));
        assert_eq!(q.limit, Some(2));
    }

    #[test]
    fn later_order_replaces_earlier() {
        let q = Query::new().order_desc("created_at").order_asc("name");
        assert_eq!(q.order.map(|o| o.param()).as_deref(), Some("name.asc"));
    }
}
