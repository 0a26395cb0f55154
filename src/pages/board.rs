use chrono::NaiveDate;
use leptos::logging::log;
use leptos::prelude::*;
use crate::core::models::TaskSummary;
use crate::features::task_card::TaskCard;

pub fn demo_tasks() -> Vec<TaskSummary> {
    let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();
    vec![
        TaskSummary::placeholder(),
        TaskSummary::new(
            "Task 2".to_string(),
            date(4, 12),
            "Summarize the latest competitor announcements into a short brief.".to_string(),
        ),
        TaskSummary::new(
            "Task 3".to_string(),
            date(5, 3),
            "Draft a launch checklist for the next product release.".to_string(),
        ),
    ]
}

/// Lists task cards; clicking one makes it the active card.
#[component]
pub fn TaskBoard() -> impl IntoView {
    let tasks = demo_tasks();
    let (selected, set_selected) = signal(None::<String>);

    view! {
        <div class="task-board">
            {tasks.into_iter().map(|task| {
                let task_id = task.id.clone();
                let task_id_for_click = task.id.clone();
                view! {
                    <div
                        class="task-board-item clickable"
                        on:click=move |_| {
                            log!("Selected task {}", task_id_for_click);
                            set_selected.set(Some(task_id_for_click.clone()));
                        }
                    >
                        {move || {
                            let active = selected.get().as_deref() == Some(task_id.as_str());
                            view! { <TaskCard summary=task.clone() active=active /> }
                        }}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
