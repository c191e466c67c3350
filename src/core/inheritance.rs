use crate::core::{Console, Drawable, Result};

/// A shape that gains a coloring action on top of everything `Shape` does.
///
/// It carries the same state as `Shape` and takes `draw` from the provided
/// `Drawable` method unchanged; only `set_color` is new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredShape {
    name: String,
}

impl ColoredShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 上色只產生輸出，不保存顏色
    pub fn set_color(&self, console: &dyn Console, color: &str) -> Result<()> {
        tracing::debug!(shape = %self.name, color, "set color");
        console.print_line(&format!("color the {} {}", self.name, color))
    }
}

impl Drawable for ColoredShape {
    fn name(&self) -> &str {
        &self.name
    }
}
