use std::fmt;

/// Formation phase a person or group belongs to.
///
/// The portal sends phases as free-form labels. They are resolved through
/// [`PHASE_TABLE`]; anything not listed becomes [`Phase::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	First,
	Second,
	Third,
	PreCatechumenate,
	Catechumenate,
	Unknown,
}

const PHASE_TABLE: &[(&str, Phase)] = &[
	("1ª Fase", Phase::First),
	("2ª Fase", Phase::Second),
	("3ª Fase", Phase::Third),
	("Pré-Catecumenato", Phase::PreCatechumenate),
	("Catecumenato", Phase::Catechumenate),
];

impl Phase {
	/// Resolve a wire label, falling back to [`Phase::Unknown`].
	#[must_use]
	pub fn from_label(label: &str) -> Self {
		let label = label.trim();
		PHASE_TABLE
			.iter()
			.find(|(candidate, _)| *candidate == label)
			.map_or(Phase::Unknown, |(_, phase)| *phase)
	}

	/// Canonical label used by the portal for this phase.
	#[must_use]
	pub fn label(self) -> Option<&'static str> {
		PHASE_TABLE
			.iter()
			.find(|(_, phase)| *phase == self)
			.map(|(label, _)| *label)
	}
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label().unwrap_or("—"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_labels_resolve_to_their_phase() {
		assert_eq!(Phase::from_label("1ª Fase"), Phase::First);
		assert_eq!(Phase::from_label(" Catecumenato "), Phase::Catechumenate);
		assert_eq!(Phase::from_label("Pré-Catecumenato"), Phase::PreCatechumenate);
	}

	#[test]
	fn unknown_labels_fall_back() {
		assert_eq!(Phase::from_label("Crisma"), Phase::Unknown);
		assert_eq!(Phase::from_label(""), Phase::Unknown);
		assert_eq!(Phase::Unknown.label(), None);
		assert_eq!(Phase::Unknown.to_string(), "—");
	}
}
