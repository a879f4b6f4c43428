/// Text shown by the terminal host.
///
/// Defaults match the portal's own copy; every field can be overridden from
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub subtitle: String,
	pub placeholder: String,
	pub people_label: String,
	pub contacts_label: String,
	pub search_button: String,
	pub empty_prompt: String,
	pub empty_hint: String,
	pub guardian_badge: String,
	pub full_search_hint: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Portal de Catequese".to_string(),
			subtitle: "Consulte turmas, catecúmenos e horários".to_string(),
			placeholder: "Pesquisar catecúmeno, catequista...".to_string(),
			people_label: "Catecúmenos".to_string(),
			contacts_label: "Catequistas".to_string(),
			search_button: "Pesquisar".to_string(),
			empty_prompt: "Escreva para pesquisar".to_string(),
			empty_hint: "catecúmenos, catequistas ou encarregados".to_string(),
			guardian_badge: "via encarregado".to_string(),
			full_search_hint: "Enter abre a pesquisa completa".to_string(),
		}
	}
}

impl UiConfig {
	/// Affordance shown while the query is below the minimum length.
	#[must_use]
	pub fn too_short(&self, min_query_len: usize) -> String {
		format!("Pelo menos {min_query_len} caracteres...")
	}

	/// Affordance shown when a settled search found nothing.
	#[must_use]
	pub fn no_results(&self, query: &str) -> String {
		format!("Sem resultados para “{}”", query.trim())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn affordances_include_context() {
		let config = UiConfig::default();
		assert_eq!(config.too_short(2), "Pelo menos 2 caracteres...");
		assert_eq!(config.no_results(" xyz "), "Sem resultados para “xyz”");
	}
}
