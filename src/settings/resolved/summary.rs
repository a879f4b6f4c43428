use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Portal: {}", config.portal.base_url);
	match &config.portal.fixture {
		Some(path) => println!(
			"  Backend: fixture {} (latency {} ms)",
			path.display(),
			config.portal.fixture_latency.as_millis()
		),
		None => println!(
			"  Backend: HTTP (timeout {} ms)",
			config.portal.timeout.as_millis()
		),
	}
	println!(
		"  Palette debounce: {} ms",
		config.options.palette_debounce.as_millis()
	);
	println!(
		"  Inline debounce: {} ms",
		config.options.hero_debounce.as_millis()
	);
	println!("  Minimum query length: {}", config.options.min_query_len);
	println!("  Inline hits per category: {}", config.options.hero_cap);
	println!("  Title: {}", config.ui.title);
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	if config.initial_query.is_empty() {
		println!("  Initial query: (empty)");
	} else {
		println!("  Initial query: {}", config.initial_query);
	}
	println!(
		"  Log filter: {}",
		config.log_level.as_deref().unwrap_or("info")
	);
}
