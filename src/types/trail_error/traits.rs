use super::TrailError;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::ops::Shl;

// Frame offsets index into the description, so the description alone
// decides identity.
impl PartialEq for TrailError {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for TrailError {}

impl Hash for TrailError {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description.hash(state);
    }
}

impl Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl core::error::Error for TrailError {}

impl fmt::Write for TrailError {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.description.push_str(s);
        Ok(())
    }
}

/// `trail << a << b` appends `a` then `b` to the current frame.
impl<T: Display> Shl<T> for TrailError {
    type Output = TrailError;

    #[inline]
    fn shl(mut self, rhs: T) -> Self::Output {
        self.append(rhs);
        self
    }
}

impl<'a, T: Display> Shl<T> for &'a mut TrailError {
    type Output = &'a mut TrailError;

    #[inline]
    fn shl(self, rhs: T) -> Self::Output {
        self.append(rhs)
    }
}
