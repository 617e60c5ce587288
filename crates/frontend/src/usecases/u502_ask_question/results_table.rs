use super::model::results_label;
use crate::shared::icons::icon;
use contracts::usecases::u502_ask_question::SearchResultRow;
use leptos::prelude::*;
use thaw::*;

/// Per-document answers, rendered verbatim. No rows renders an empty table.
#[component]
pub fn ResultsTable(#[prop(into)] rows: Signal<Vec<SearchResultRow>>) -> impl IntoView {
    view! {
        <div class="results">
            <div class="results__header">
                <span class="results__icon">{icon("find-in-page")}</span>
                <h2 class="results__title">"Search Results"</h2>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || rows.with(|r| results_label(r.len()))}</span>
                </Badge>
            </div>

            <div class="results__table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 20%;">"Document ID"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 60%;">"Extracted Answer"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 20%;">"Citation"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| view! {
                                    <TableRow>
                                        <TableCell class="results__doc-id">{row.document_id}</TableCell>
                                        <TableCell class="results__answer">{row.extracted_answer}</TableCell>
                                        <TableCell class="results__citation">{row.citation}</TableCell>
                                    </TableRow>
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
