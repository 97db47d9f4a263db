use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashSet;

/// Retry cap for the generate-check loop. With 6-digit IDs and 8-character
/// codes the collision probability is tiny until the space is nearly
/// exhausted, at which point failing loudly beats spinning forever.
const MAX_ATTEMPTS: u32 = 1024;

/// Issues hold IDs and confirmation codes, guaranteeing process-lifetime
/// uniqueness by keeping every value ever handed out. Owned by the service
/// so tests get a fresh registry per instance.
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued_hold_ids: HashSet<u32>,
    issued_codes: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdGenError {
    #[error("identifier length must be between 1 and 9 digits, got {0}")]
    InvalidLength(u32),

    #[error("could not find an unused identifier after {attempts} attempts")]
    SpaceExhausted { attempts: u32 },
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A random positive integer with exactly `digits` decimal digits,
    /// unique among all hold IDs this generator ever returned (including
    /// IDs whose holds have since expired).
    pub fn next_hold_id(&mut self, digits: u32) -> Result<u32, IdGenError> {
        if digits == 0 || digits > 9 {
            return Err(IdGenError::InvalidLength(digits));
        }
        let low = 10u32.pow(digits - 1);
        let high = low * 10 - 1;

        let mut rng = rand::thread_rng();
        for _ in 0..MAX_ATTEMPTS {
            let candidate = rng.gen_range(low..=high);
            if self.issued_hold_ids.insert(candidate) {
                return Ok(candidate);
            }
        }
        tracing::warn!(digits, "hold ID space saturated");
        Err(IdGenError::SpaceExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// A random alphanumeric string (mixed-case letters and digits) of
    /// exactly `length` characters, unique among all codes ever returned.
    pub fn next_confirmation_code(&mut self, length: usize) -> Result<String, IdGenError> {
        if length == 0 {
            return Err(IdGenError::InvalidLength(0));
        }

        for _ in 0..MAX_ATTEMPTS {
            let candidate: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(length)
                .map(char::from)
                .collect();
            if !self.issued_codes.contains(&candidate) {
                self.issued_codes.insert(candidate.clone());
                return Ok(candidate);
            }
        }
        tracing::warn!(length, "confirmation code space saturated");
        Err(IdGenError::SpaceExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_ids_have_the_requested_digit_count() {
        let mut gen = IdGenerator::new();
        for digits in 1..=9 {
            let id = gen.next_hold_id(digits).unwrap();
            assert_eq!(id.to_string().len() as u32, digits);
        }
    }

    #[test]
    fn hold_id_generation_rejects_invalid_lengths() {
        let mut gen = IdGenerator::new();
        assert_eq!(gen.next_hold_id(0), Err(IdGenError::InvalidLength(0)));
        assert_eq!(gen.next_hold_id(10), Err(IdGenError::InvalidLength(10)));
    }

    #[test]
    fn ten_thousand_hold_ids_are_unique() {
        let mut gen = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = gen.next_hold_id(6).unwrap();
            assert!(seen.insert(id), "duplicate hold ID {}", id);
        }
    }

    #[test]
    fn confirmation_codes_have_the_requested_length() {
        let mut gen = IdGenerator::new();
        for length in [1, 5, 8, 13] {
            let code = gen.next_confirmation_code(length).unwrap();
            assert_eq!(code.len(), length);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn confirmation_code_generation_rejects_zero_length() {
        let mut gen = IdGenerator::new();
        assert_eq!(
            gen.next_confirmation_code(0),
            Err(IdGenError::InvalidLength(0))
        );
    }

    #[test]
    fn ten_thousand_confirmation_codes_are_unique() {
        let mut gen = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let code = gen.next_confirmation_code(8).unwrap();
            assert!(seen.insert(code), "duplicate confirmation code");
        }
    }

    #[test]
    fn exhausting_a_tiny_id_space_fails_instead_of_looping() {
        let mut gen = IdGenerator::new();
        // 1-digit space has only nine values
        for _ in 0..9 {
            gen.next_hold_id(1).unwrap();
        }
        assert_eq!(
            gen.next_hold_id(1),
            Err(IdGenError::SpaceExhausted {
                attempts: MAX_ATTEMPTS
            })
        );
    }
}
