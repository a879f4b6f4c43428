use serde::{Deserialize, Serialize};

use super::{Phase, null_as_default};

/// Value of `found_via` when a person matched through their guardian's name.
const FOUND_VIA_GUARDIAN: &str = "encarregado";

/// Payload returned by the portal search endpoint.
///
/// Both categories keep the order chosen by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	#[serde(rename = "catecumenos", default, deserialize_with = "null_as_default")]
	pub people: Vec<PersonHit>,
	#[serde(rename = "catequistas", default, deserialize_with = "null_as_default")]
	pub group_contacts: Vec<GroupContactHit>,
}

impl SearchResult {
	#[must_use]
	pub fn new(people: Vec<PersonHit>, group_contacts: Vec<GroupContactHit>) -> Self {
		Self {
			people,
			group_contacts,
		}
	}

	/// Total number of hits across both categories.
	#[must_use]
	pub fn len(&self) -> usize {
		self.people.len() + self.group_contacts.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.people.is_empty() && self.group_contacts.is_empty()
	}
}

/// A matched member of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonHit {
	/// Unique identity of the person; also the key of their detail page.
	pub name: String,
	#[serde(rename = "fase", default, deserialize_with = "null_as_default")]
	pub phase_label: String,
	#[serde(rename = "turma", default, deserialize_with = "null_as_default")]
	pub group: Option<String>,
	#[serde(rename = "sexo", default, deserialize_with = "null_as_default")]
	pub sex: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub status: Option<String>,
	#[serde(rename = "encarregado", default, deserialize_with = "null_as_default")]
	pub guardian: Option<String>,
	#[serde(rename = "local", default, deserialize_with = "null_as_default")]
	pub location: Option<String>,
	#[serde(rename = "dia", default, deserialize_with = "null_as_default")]
	pub day: Option<String>,
	#[serde(rename = "hora", default, deserialize_with = "null_as_default")]
	pub time: Option<String>,
	#[serde(rename = "catequista", default, deserialize_with = "null_as_default")]
	pub catechist: Option<String>,
	#[serde(rename = "catequista_adj", default, deserialize_with = "null_as_default")]
	pub assistant: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub found_via: Option<String>,
}

impl PersonHit {
	#[must_use]
	pub fn new(name: impl Into<String>, phase_label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			phase_label: phase_label.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_group(mut self, group: impl Into<String>) -> Self {
		self.group = Some(group.into());
		self
	}

	#[must_use]
	pub fn matched_via_guardian(&self) -> bool {
		self.found_via.as_deref() == Some(FOUND_VIA_GUARDIAN)
	}

	pub fn mark_matched_via_guardian(&mut self) {
		self.found_via = Some(FOUND_VIA_GUARDIAN.to_string());
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		Phase::from_label(&self.phase_label)
	}
}

/// A group whose catechist (or assistant) matched the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupContactHit {
	#[serde(rename = "catequista", default, deserialize_with = "null_as_default")]
	pub catechist: Option<String>,
	#[serde(rename = "catequista_adj", default, deserialize_with = "null_as_default")]
	pub assistant: Option<String>,
	/// Identity of the group; also the key of its detail page.
	#[serde(rename = "turma")]
	pub group: String,
	#[serde(rename = "fase", default, deserialize_with = "null_as_default")]
	pub phase_label: String,
	#[serde(rename = "local", default, deserialize_with = "null_as_default")]
	pub location: Option<String>,
	#[serde(rename = "dia", default, deserialize_with = "null_as_default")]
	pub day: Option<String>,
	#[serde(rename = "hora", default, deserialize_with = "null_as_default")]
	pub time: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub status: Option<String>,
}

impl GroupContactHit {
	#[must_use]
	pub fn new(
		catechist: impl Into<String>,
		group: impl Into<String>,
		phase_label: impl Into<String>,
	) -> Self {
		Self {
			catechist: Some(catechist.into()),
			group: group.into(),
			phase_label: phase_label.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_assistant(mut self, assistant: impl Into<String>) -> Self {
		self.assistant = Some(assistant.into());
		self
	}

	/// Contact names joined the way the portal shows them ("Ana & Rui").
	#[must_use]
	pub fn contacts(&self) -> String {
		[self.catechist.as_deref(), self.assistant.as_deref()]
			.into_iter()
			.flatten()
			.filter(|name| !name.trim().is_empty())
			.collect::<Vec<_>>()
			.join(" & ")
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		Phase::from_label(&self.phase_label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn null_and_missing_categories_become_empty() {
		let result: SearchResult =
			serde_json::from_str(r#"{ "catecumenos": null }"#).expect("parse");
		assert!(result.people.is_empty());
		assert!(result.group_contacts.is_empty());
		assert!(result.is_empty());
	}

	#[test]
	fn person_fields_follow_wire_names() {
		let json = r#"{
			"name": "Ana Sousa",
			"fase": "2ª Fase",
			"turma": "T-2A",
			"sexo": "F",
			"status": "Activo",
			"encarregado": "Maria Sousa",
			"local": "Salão",
			"dia": "Sábado",
			"hora": "10:00",
			"catequista": "Rui",
			"catequista_adj": null,
			"found_via": "encarregado"
		}"#;
		let hit: PersonHit = serde_json::from_str(json).expect("parse");
		assert_eq!(hit.name, "Ana Sousa");
		assert_eq!(hit.phase(), Phase::Second);
		assert_eq!(hit.group.as_deref(), Some("T-2A"));
		assert_eq!(hit.assistant, None);
		assert!(hit.matched_via_guardian());
	}

	#[test]
	fn null_phase_is_empty_label() {
		let hit: PersonHit =
			serde_json::from_str(r#"{ "name": "Rui", "fase": null }"#).expect("parse");
		assert_eq!(hit.phase_label, "");
		assert_eq!(hit.phase(), Phase::Unknown);
		assert!(!hit.matched_via_guardian());
	}

	#[test]
	fn contacts_skip_missing_assistant() {
		let single = GroupContactHit::new("Ana", "T1", "1ª Fase");
		assert_eq!(single.contacts(), "Ana");
		let pair = single.with_assistant("Rui");
		assert_eq!(pair.contacts(), "Ana & Rui");
	}

	#[test]
	fn backend_order_is_kept() {
		let json = r#"{
			"catecumenos": [{ "name": "Zé" }, { "name": "Ana" }],
			"catequistas": [{ "catequista": "Rui", "turma": "B" }, { "catequista": "Ana", "turma": "A" }]
		}"#;
		let result: SearchResult = serde_json::from_str(json).expect("parse");
		let names: Vec<_> = result.people.iter().map(|hit| hit.name.as_str()).collect();
		assert_eq!(names, ["Zé", "Ana"]);
		let groups: Vec<_> = result
			.group_contacts
			.iter()
			.map(|hit| hit.group.as_str())
			.collect();
		assert_eq!(groups, ["B", "A"]);
		assert_eq!(result.len(), 4);
	}
}
