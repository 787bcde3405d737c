// plain struct instead of num-complex: the iteration works on the components directly
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One step of the quadratic map, `self² + c`, written out on the components.
    #[must_use]
    pub fn square_add(self, c: Self) -> Self {
        let real = self.real * self.real - self.imag * self.imag + c.real;
        let imag = 2.0 * self.real * self.imag + c.imag;

        Self { real, imag }
    }
}
