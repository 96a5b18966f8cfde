/// Convert a declared identifier to its snake_case external key.
///
/// Every uppercase character after the first is prefixed with an underscore
/// and lowercased. Consecutive uppercase runs are not collapsed, so
/// `XMLHttpRequest` becomes `x_m_l_http_request`, not `xml_http_request`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}
