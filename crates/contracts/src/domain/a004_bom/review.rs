use std::collections::HashMap;

use super::aggregate::BomLine;

#[derive(Debug, Clone, PartialEq)]
pub enum LineProblem {
    NonPositiveQuantity(f64),
    MissingItemCode,
    DuplicateLineNo,
}

impl LineProblem {
    pub fn message(&self) -> String {
        match self {
            LineProblem::NonPositiveQuantity(q) => format!("quantity must be positive (got {})", q),
            LineProblem::MissingItemCode => "item code is missing".to_string(),
            LineProblem::DuplicateLineNo => "line number is used more than once".to_string(),
        }
    }
}

/// A problem found on one line of an import preview.
#[derive(Debug, Clone, PartialEq)]
pub struct BomLineIssue {
    /// Index into the reviewed slice.
    pub index: usize,
    pub line_no: u32,
    pub problem: LineProblem,
}

/// Checks every line; issues come out in line order. Every occurrence of a
/// duplicated line number is reported.
pub fn review_lines(lines: &[BomLine]) -> Vec<BomLineIssue> {
    let mut occurrences: HashMap<u32, usize> = HashMap::new();
    for line in lines {
        *occurrences.entry(line.line_no).or_default() += 1;
    }

    let mut issues = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let mut push = |problem| {
            issues.push(BomLineIssue {
                index,
                line_no: line.line_no,
                problem,
            })
        };
        if !(line.quantity > 0.0) {
            push(LineProblem::NonPositiveQuantity(line.quantity));
        }
        if line.item_code.trim().is_empty() {
            push(LineProblem::MissingItemCode);
        }
        if occurrences.get(&line.line_no).copied().unwrap_or(0) > 1 {
            push(LineProblem::DuplicateLineNo);
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(no: u32, code: &str, quantity: f64) -> BomLine {
        BomLine {
            line_no: no,
            level: 0,
            parent_code: None,
            item_code: code.into(),
            item_name: String::new(),
            quantity,
            unit: "pcs".into(),
        }
    }

    #[test]
    fn test_clean_lines() {
        assert!(review_lines(&[line(1, "A", 1.0), line(2, "B", 0.5)]).is_empty());
    }

    #[test]
    fn test_flags_bad_lines() {
        let lines = [
            line(1, "A", 0.0),
            line(2, " ", 3.0),
            line(3, "C", 1.0),
            line(3, "D", -2.0),
        ];
        let issues = review_lines(&lines);
        let found: Vec<(usize, LineProblem)> =
            issues.into_iter().map(|i| (i.index, i.problem)).collect();
        assert_eq!(
            found,
            vec![
                (0, LineProblem::NonPositiveQuantity(0.0)),
                (1, LineProblem::MissingItemCode),
                (2, LineProblem::DuplicateLineNo),
                (3, LineProblem::NonPositiveQuantity(-2.0)),
                (3, LineProblem::DuplicateLineNo),
            ]
        );
    }

    #[test]
    fn test_nan_quantity_is_flagged() {
        let issues = review_lines(&[line(1, "A", f64::NAN)]);
        assert_eq!(issues.len(), 1);
    }
}
