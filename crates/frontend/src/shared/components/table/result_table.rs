use super::table_view::{TableBody, TableView};
use leptos::prelude::*;

/// Read-only table for a [`TableView`]
#[component]
pub fn ResultTable(table: TableView) -> impl IntoView {
    let TableView { id, columns, body } = table;
    let numeric: Vec<bool> = columns.iter().map(|c| c.numeric).collect();

    let header = columns
        .into_iter()
        .map(|col| {
            let class = if col.numeric { "text-right" } else { "" };
            view! { <th class=class>{col.title}</th> }
        })
        .collect_view();

    let rows = match body {
        TableBody::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                let cells = row
                    .into_iter()
                    .zip(numeric.iter().copied())
                    .map(|(cell, is_numeric)| {
                        let class = if is_numeric { "text-right" } else { "" };
                        view! { <td class=class>{cell}</td> }
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
            .into_any(),
        TableBody::Placeholder { message, colspan } => view! {
            <tr>
                <td class="table__placeholder" colspan={colspan.to_string()}>
                    {message}
                </td>
            </tr>
        }
        .into_any(),
    };

    view! {
        <div class="table-container">
            <table class="table__data" id=id>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
