/// Something that wraps an input and hands back a decorated output.
pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}
