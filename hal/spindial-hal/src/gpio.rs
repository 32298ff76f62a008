//! GPIO pin abstractions
//!
//! Only digital input is needed outside the display bus: the game button
//! is sampled once per frame.

/// Digital input pin
///
/// Implementations read the electrical level of the pin. Read faults are
/// reported as a low level.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        T::is_high(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Level(bool);

    impl InputPin for Level {
        fn is_high(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_is_low_is_inverse() {
        assert!(Level(false).is_low());
        assert!(!Level(true).is_low());
    }

    fn sample<P: InputPin>(mut pin: P) -> bool {
        pin.is_high()
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut pin = Level(true);
        assert!(sample(&mut pin));
        pin.0 = false;
        assert!(!sample(&mut pin));
    }
}
