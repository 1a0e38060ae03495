use std::fmt;

/// One candidate item: a unique name, a weight and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub cost: u64,
    pub value: u64,
}

/// A generated knapsack problem: the weight limit and the items to choose from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Instance {
    /// Number of lines the text form occupies.
    pub fn line_count(&self) -> usize {
        self.items.len() + 1
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.cost, self.value)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.capacity)?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
