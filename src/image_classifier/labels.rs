use crate::image_classifier::error::ClassifierError;
use std::path::Path;

/// Reads one class label per line.
///
/// Accepts both plain label files and ImageNet synset files, where each line
/// starts with a WordNet id and lists comma separated synonyms
/// (`n02099601 golden retriever`). Only the first synonym is kept.
pub fn load_labels(path: &Path) -> Result<Vec<String>, ClassifierError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ClassifierError::Labels {
        path: path.to_path_buf(),
        source,
    })?;

    let labels = parse_labels(&contents);
    if labels.is_empty() {
        return Err(ClassifierError::EmptyLabels(path.to_path_buf()));
    }
    Ok(labels)
}

pub fn parse_labels(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> String {
    let without_id = match line.split_once(' ') {
        Some((id, rest)) if is_wordnet_id(id) => rest,
        _ => line,
    };

    without_id
        .split(',')
        .next()
        .unwrap_or(without_id)
        .trim()
        .to_string()
}

fn is_wordnet_id(token: &str) -> bool {
    token.len() == 9
        && token.starts_with('n')
        && token[1..].chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synset_lines() {
        let contents = "n01440764 tench, Tinca tinca\nn02099601 golden retriever\n\nn11939491 daisy\n";

        assert_eq!(
            parse_labels(contents),
            vec!["tench", "golden retriever", "daisy"]
        );
    }

    #[test]
    fn test_parse_plain_labels() {
        let contents = "background\nMint\n  Aloe Vera  \n";

        assert_eq!(parse_labels(contents), vec!["background", "Mint", "Aloe Vera"]);
    }

    #[test]
    fn test_load_labels_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load_labels(&missing),
            Err(ClassifierError::Labels { .. })
        ));

        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, "\n\n").unwrap();
        assert!(matches!(
            load_labels(&empty),
            Err(ClassifierError::EmptyLabels(_))
        ));

        let synset = dir.path().join("synset.txt");
        std::fs::write(&synset, "n11939491 daisy\n").unwrap();
        assert_eq!(load_labels(&synset).unwrap(), vec!["daisy"]);
    }
}
