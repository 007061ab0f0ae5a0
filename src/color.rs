use std::fmt::{self, Display};

use termion::color as term;
pub use termion::color::{Red, Yellow};

/// Paints the foreground of the wrapped value when it is displayed.
pub struct Fg<C, T>(pub C, pub T);

impl<C, T> Display for Fg<C, T>
where
    C: term::Color + Copy,
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", term::Fg(self.0), self.1, term::Fg(term::Reset))
    }
}
