pub trait Arrow: Sized {
    type Object;
    type Error;

    fn source(&self) -> Self::Object;
    fn target(&self) -> Self::Object;

    /// the identity morphism on `a`
    fn identity(a: &Self::Object) -> Self;

    /// Compose morphisms in diagrammatic order: `self ; other`
    ///
    /// # Errors
    ///
    /// Returns an error if `self.target() != other.source()`.
    fn compose(&self, other: &Self) -> Result<Self, Self::Error>;
}

pub trait Monoidal: Arrow {
    /// the monoidal unit
    fn unit() -> Self;

    /// `f \otimes g` of two morphisms
    fn tensor(&self, other: &Self) -> Result<Self, Self::Error>;
}
