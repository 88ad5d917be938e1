use serde::Deserialize;

/// One entry from `GET /entries/en/{word}`. The endpoint returns a list of these.
///
/// Every level is optional; a missing level reads as "no definition".
#[derive(Deserialize, Debug)]
pub struct Entry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Deserialize, Debug)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Deserialize, Debug)]
pub struct Definition {
    pub definition: Option<String>,
}

/// `entries[0].meanings[0].definitions[0].definition`, if present and non-empty.
pub fn first_definition(entries: &[Entry]) -> Option<&str> {
    entries
        .first()?
        .meanings
        .first()?
        .definitions
        .first()?
        .definition
        .as_deref()
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(body: serde_json::Value) -> Vec<Entry> {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn takes_first_definition_of_first_meaning() {
        let list = entries(serde_json::json!([
            {
                "word": "elephant",
                "meanings": [
                    {"partOfSpeech": "noun", "definitions": [
                        {"definition": "A mammal of the order Proboscidea."},
                        {"definition": "Something unwieldy."}
                    ]},
                    {"partOfSpeech": "verb", "definitions": [{"definition": "To stomp."}]}
                ]
            },
            {"word": "elephant", "meanings": [{"definitions": [{"definition": "ignored"}]}]}
        ]));
        assert_eq!(
            first_definition(&list),
            Some("A mammal of the order Proboscidea.")
        );
    }

    #[test]
    fn missing_levels_yield_none() {
        assert_eq!(first_definition(&entries(serde_json::json!([]))), None);
        assert_eq!(first_definition(&entries(serde_json::json!([{"word": "x"}]))), None);
        assert_eq!(
            first_definition(&entries(serde_json::json!([{"meanings": [{}]}]))),
            None
        );
        assert_eq!(
            first_definition(&entries(
                serde_json::json!([{"meanings": [{"definitions": [{"example": "only"}]}]}])
            )),
            None
        );
        assert_eq!(
            first_definition(&entries(
                serde_json::json!([{"meanings": [{"definitions": [{"definition": ""}]}]}])
            )),
            None
        );
    }
}
