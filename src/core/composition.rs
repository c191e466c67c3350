use crate::core::decorator::Decorator;
use crate::core::{Console, Drawable, Result};

/// Wraps any `Drawable` by reference and colors it before every draw.
///
/// The wrapped shape stays owned by the caller, who may keep drawing it
/// directly while the decorator exists.
pub struct ColorDecorator<'a, S: Drawable + ?Sized> {
    shape: &'a S,
}

impl<'a, S: Drawable + ?Sized> ColorDecorator<'a, S> {
    pub fn new(shape: &'a S) -> Self {
        Self { shape }
    }

    pub fn inner(&self) -> &'a S {
        self.shape
    }

    /// 這個版本的上色訊息不帶顏色值
    pub fn set_color(&self, console: &dyn Console) -> Result<()> {
        tracing::debug!(shape = self.shape.name(), "set color");
        console.print_line(&format!("color the {}", self.shape.name()))
    }
}

impl<S: Drawable + ?Sized> Drawable for ColorDecorator<'_, S> {
    fn name(&self) -> &str {
        self.shape.name()
    }

    fn draw(&self, console: &dyn Console) -> Result<()> {
        self.set_color(console)?;
        self.shape.draw(console)
    }
}

/// Turns a borrowed shape into a `ColorDecorator`.
#[derive(Default, Clone, Copy, Debug)]
pub struct ColorDecoration;

impl<'a, S: Drawable + ?Sized> Decorator<&'a S> for ColorDecoration {
    type Out = ColorDecorator<'a, S>;

    fn decorate(&self, raw: &'a S) -> Self::Out {
        ColorDecorator::new(raw)
    }
}
