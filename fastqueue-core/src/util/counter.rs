/// Hands out serial numbers that count down. The returned value is the current state, after
/// which the state moves one step down.
pub trait Counter {
    type Output;

    fn get_and_decrement(self) -> Self::Output;
}

impl Counter for &mut i64 {
    type Output = i64;

    fn get_and_decrement(self) -> Self::Output {
        let current = *self;
        *self = i64::checked_sub(current, 1).expect("attempt to subtract with overflow");
        current
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decrement() {
        let mut serial = 0i64;
        assert_eq!(serial.get_and_decrement(), 0);
        assert_eq!(serial.get_and_decrement(), -1);
        assert_eq!(serial, -2);
    }

    #[test]
    #[should_panic]
    fn test_overflow() {
        let mut serial = i64::MIN;
        serial.get_and_decrement();
    }
}
