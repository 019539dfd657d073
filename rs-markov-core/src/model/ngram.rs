use std::fmt;

/// An ordered window of `n` consecutive words.
///
/// Equality and hashing are structural: two n-grams built from different
/// positions of a text are the same key when their words match.
///
/// ## Invariants
/// - The number of words is fixed at construction and never changes
/// - `shifted` preserves the length
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NGram(Box<[String]>);

impl NGram {
	/// Builds an n-gram from a slice of words.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		Self(words.iter().map(|w| w.as_ref().to_owned()).collect())
	}

	/// Number of words in the window.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Words of the window, in order.
	pub fn words(&self) -> &[String] {
		&self.0
	}

	/// Iterates the words as string slices.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Returns `true` if the first word begins with an uppercase letter.
	///
	/// Only such n-grams may start a generated text.
	pub fn starts_uppercase(&self) -> bool {
		self.0
			.first()
			.and_then(|word| word.chars().next())
			.is_some_and(char::is_uppercase)
	}

	/// Slides the window by one word: drops the first word, appends `next`.
	///
	/// Example:
	/// `(hi, there)` + `"mary"` → `(there, mary)`
	pub fn shifted(&self, next: &str) -> Self {
		if self.0.is_empty() {
			return self.clone();
		}
		let mut words = Vec::with_capacity(self.0.len());
		words.extend(self.0[1..].iter().cloned());
		words.push(next.to_owned());
		Self(words.into_boxed_slice())
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.0.join(", "))
	}
}
