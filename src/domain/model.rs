use crate::domain::ports::Drawable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
}

impl Shape {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Drawable for Shape {
    fn name(&self) -> &str {
        &self.name
    }
}
