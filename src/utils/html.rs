/// Escape text coming from the article API before it is placed in a page.
///
/// Every markup-significant character is turned into an entity, including
/// whitespace, so the result is safe both as element text and inside quoted
/// or unquoted attribute values. Browsers decode the entities back, also
/// inside `<textarea>`.
pub fn escape(input: &str) -> String {
    ammonia::clean_text(input)
}
