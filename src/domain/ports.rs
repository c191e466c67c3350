use crate::utils::error::Result;

/// 輸出埠：每次呼叫寫出一行
pub trait Console {
    fn print_line(&self, line: &str) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &C {
    fn print_line(&self, line: &str) -> Result<()> {
        (**self).print_line(line)
    }
}

/// Capability set shared by plain and decorated shapes: a readable name and `draw`.
pub trait Drawable {
    fn name(&self) -> &str;

    fn draw(&self, console: &dyn Console) -> Result<()> {
        tracing::debug!(shape = self.name(), "draw");
        console.print_line(&format!("draw {}", self.name()))
    }
}
