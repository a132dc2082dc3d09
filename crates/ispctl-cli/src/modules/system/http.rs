use serde_json::Value;

pub(crate) fn print_json_response(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub(crate) fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

pub(crate) fn flag_param(key: &str, set: bool) -> Option<(String, String)> {
    set.then(|| (key.to_string(), "true".to_string()))
}

pub(crate) fn append_params(url: &mut String, params: Vec<(String, String)>) {
    if params.is_empty() {
        return;
    }
    let query = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<String>>()
        .join("&");
    url.push('?');
    url.push_str(&query);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_are_encoded() {
        let mut url = "/customers/search".to_string();
        let params = build_params([
            opt_param("query", Some("Asha N.".to_string())),
            opt_param("page", None),
            flag_param("includeDisabled", true),
        ]);
        append_params(&mut url, params);
        assert_eq!(
            url,
            "/customers/search?query=Asha%20N.&includeDisabled=true"
        );
    }
}
