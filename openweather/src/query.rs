// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Builds the `q=` location fragment from up to three free-text parts
/// (city, region, country). An empty part means "not supplied" and is
/// skipped; exactly one comma separates consecutive kept parts. All parts
/// empty yields a bare `q=` — callers own the decision to send it anyway.
pub fn location_query(city: &str, region: &str, country: &str) -> String {
  let parts: Vec<&str> = [city, region, country]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

  format!("q={}", parts.join(","))
}
