use contracts::domain::a004_bom::{BomLine, BomLineIssue};
use leptos::prelude::*;

use crate::shared::components::stat_card::format_number;

const INDENT_PX: u32 = 18;

/// Problems of the line at `index`, joined for display.
fn problems_of(issues: &[BomLineIssue], index: usize) -> Option<String> {
    let messages: Vec<String> = issues
        .iter()
        .filter(|issue| issue.index == index)
        .map(|issue| issue.problem.message())
        .collect();
    (!messages.is_empty()).then(|| messages.join("; "))
}

/// Product tree as a flat table, item names indented by level. Lines with
/// review issues are highlighted and carry the messages in a last column.
#[component]
pub fn BomLinesTable(
    #[prop(into)] lines: Signal<Vec<BomLine>>,
    #[prop(optional, into)] issues: Signal<Vec<BomLineIssue>>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--compact">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"#"</th>
                        <th class="table__header-cell">"Item"</th>
                        <th class="table__header-cell">"Code"</th>
                        <th class="table__header-cell">"Parent"</th>
                        <th class="table__header-cell table__cell--right">"Quantity"</th>
                        <th class="table__header-cell">"Unit"</th>
                        <th class="table__header-cell">"Issues"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let all_issues = issues.get();
                        lines.get().into_iter().enumerate().map(|(index, line)| {
                            let problems = problems_of(&all_issues, index);
                            let invalid = problems.is_some();
                            let indent = format!("padding-left: {}px", line.level * INDENT_PX);
                            view! {
                                <tr class="table__row" class:table__row--invalid=invalid>
                                    <td class="table__cell">{line.line_no}</td>
                                    <td class="table__cell" style=indent>{line.item_name}</td>
                                    <td class="table__cell table__cell--mono">{line.item_code}</td>
                                    <td class="table__cell">{line.parent_code.unwrap_or_default()}</td>
                                    <td class="table__cell table__cell--right">{format_number(line.quantity, 3)}</td>
                                    <td class="table__cell">{line.unit}</td>
                                    <td class="table__cell table__cell--error">{problems.unwrap_or_default()}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_bom::LineProblem;

    #[test]
    fn test_problems_of_joins_messages() {
        let issues = vec![
            BomLineIssue { index: 1, line_no: 2, problem: LineProblem::MissingItemCode },
            BomLineIssue { index: 1, line_no: 2, problem: LineProblem::DuplicateLineNo },
            BomLineIssue { index: 3, line_no: 2, problem: LineProblem::DuplicateLineNo },
        ];
        assert_eq!(problems_of(&issues, 0), None);
        assert_eq!(
            problems_of(&issues, 1).as_deref(),
            Some("item code is missing; line number is used more than once")
        );
    }
}
