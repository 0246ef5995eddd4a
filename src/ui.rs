use crate::models::{Goal, SyncState};
use crate::progress::SessionView;

pub fn render_index(view: &SessionView) -> String {
    let view_json = serde_json::to_string(view)
        .map(|json| json.replace("</", "<\\/"))
        .unwrap_or_else(|_| "null".to_string());
    let items: String = view.goals.iter().map(render_goal).collect();
    let placeholder = format!("Goal for {}...", view.label);

    fill(INDEX_HTML, |name| match name {
        "LABEL" => Some(escape_html(&view.label)),
        "PLACEHOLDER" => Some(escape_html(&placeholder)),
        "PROGRESS" => Some(view.progress.to_string()),
        "ERROR" => Some(escape_html(view.error.as_deref().unwrap_or_default())),
        "ERROR_HIDDEN" => Some(hidden(view.error.is_none())),
        "LOADING_HIDDEN" => Some(hidden(!(view.loading && view.goals.is_empty()))),
        "EMPTY_HIDDEN" => Some(hidden(view.loading || !view.goals.is_empty())),
        "ITEMS" => Some(items.clone()),
        "VIEW_JSON" => Some(view_json.clone()),
        _ => None,
    })
}

fn render_goal(goal: &Goal) -> String {
    let mut class = String::from("goal");
    if goal.completed {
        class.push_str(" done");
    }
    match goal.sync {
        SyncState::Synced => {}
        SyncState::Pending => class.push_str(" pending"),
        SyncState::Failed => class.push_str(" failed"),
    }
    format!(
        r#"<li class="{class}"><span class="mark">{mark}</span><span class="title">{title}</span></li>"#,
        mark = if goal.completed { "●" } else { "○" },
        title = escape_html(&goal.title),
    )
}

fn hidden(is_hidden: bool) -> String {
    if is_hidden { "hidden".to_string() } else { String::new() }
}

/// Substitutes `{{NAME}}` markers in one pass, so substituted text is never
/// scanned for markers again. Unknown markers are kept verbatim.
fn fill(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match value(name) {
                    Some(text) => out.push_str(&text),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Goals</title>
  <style>
    :root {
      --bg: #0f172a;
      --panel: #1e293b;
      --line: #334155;
      --ink: #f1f5f9;
      --muted: #64748b;
      --accent: #22c55e;
      --danger: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, sans-serif;
    }

    .app {
      max-width: 28rem;
      margin: 0 auto;
      padding-bottom: 6rem;
    }

    header {
      background: var(--panel);
      border-bottom: 1px solid var(--line);
      border-radius: 0 0 24px 24px;
      padding: 40px 24px 24px;
    }

    .top {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.5rem;
    }

    button {
      border: none;
      cursor: pointer;
      color: inherit;
      background: transparent;
      font: inherit;
    }

    .refresh {
      background: var(--line);
      border-radius: 999px;
      padding: 8px 12px;
    }

    .refresh.spinning {
      color: var(--accent);
      animation: spin 1s linear infinite;
    }

    .days {
      display: flex;
      justify-content: space-between;
      align-items: center;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 8px;
      margin-bottom: 16px;
    }

    .days button {
      color: var(--muted);
      padding: 8px 12px;
      font-size: 1.25rem;
    }

    .days .label {
      font-weight: 600;
      font-size: 1.1rem;
    }

    .bar {
      position: relative;
      height: 16px;
      background: #020617;
      border-radius: 999px;
      overflow: hidden;
    }

    .bar .fill {
      position: absolute;
      inset: 0 auto 0 0;
      background: linear-gradient(90deg, #16a34a, #34d399);
      transition: width 500ms;
    }

    .percent {
      text-align: right;
      font-size: 0.75rem;
      font-weight: 700;
      color: var(--accent);
      margin: 8px 0 0;
    }

    main {
      padding: 16px;
    }

    .error {
      padding: 12px;
      border: 1px solid #991b1b;
      border-radius: 8px;
      color: #fecaca;
      text-align: center;
      margin-bottom: 12px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 12px;
    }

    .goal {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 16px;
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 12px;
    }

    .goal .title {
      flex: 1;
      cursor: pointer;
    }

    .goal.done {
      opacity: 0.5;
    }

    .goal.done .title {
      text-decoration: line-through;
      color: var(--muted);
    }

    .goal.done .mark {
      color: var(--accent);
    }

    .goal.pending {
      border-style: dashed;
    }

    .goal.failed {
      border-color: var(--danger);
    }

    .goal .delete {
      color: var(--muted);
    }

    .goal .delete:hover {
      color: var(--danger);
    }

    .hint {
      text-align: center;
      color: var(--muted);
      margin-top: 40px;
    }

    form {
      position: fixed;
      bottom: 0;
      left: 0;
      right: 0;
      max-width: 28rem;
      margin: 0 auto;
      display: flex;
      gap: 8px;
      padding: 16px;
      background: rgba(15, 23, 42, 0.9);
      border-top: 1px solid var(--line);
    }

    form input {
      flex: 1;
      background: var(--panel);
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 12px 16px;
    }

    form button {
      background: #16a34a;
      border-radius: 8px;
      padding: 12px 16px;
      font-weight: 700;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <div class="top">
        <h1>Daily Goals</h1>
        <button class="refresh" id="refresh" type="button" aria-label="Reload">⟳</button>
      </div>
      <div class="days">
        <button id="prev-day" type="button" aria-label="Previous day">‹</button>
        <span class="label" id="day-label">{{LABEL}}</span>
        <button id="next-day" type="button" aria-label="Next day">›</button>
      </div>
      <div class="bar"><div class="fill" id="progress-bar" style="width: {{PROGRESS}}%"></div></div>
      <p class="percent" id="progress-text">{{PROGRESS}}% DONE</p>
    </header>

    <main>
      <div class="error" id="error" {{ERROR_HIDDEN}}>{{ERROR}}</div>
      <p class="hint" id="loading" {{LOADING_HIDDEN}}>Loading...</p>
      <ul id="goals">{{ITEMS}}</ul>
      <p class="hint" id="empty" {{EMPTY_HIDDEN}}>No goals for this day.</p>
    </main>

    <form id="add-form">
      <input id="title" type="text" autocomplete="off" placeholder="{{PLACEHOLDER}}" />
      <button type="submit" id="add">+</button>
    </form>
  </div>

  <script>
    const initialView = {{VIEW_JSON}};

    const dayLabel = document.getElementById('day-label');
    const progressBar = document.getElementById('progress-bar');
    const progressText = document.getElementById('progress-text');
    const errorBox = document.getElementById('error');
    const loadingBox = document.getElementById('loading');
    const emptyBox = document.getElementById('empty');
    const list = document.getElementById('goals');
    const refreshButton = document.getElementById('refresh');
    const form = document.getElementById('add-form');
    const input = document.getElementById('title');
    const addButton = document.getElementById('add');

    let issued = 0;
    let rendered = 0;

    const renderGoal = (goal) => {
      const item = document.createElement('li');
      item.className = 'goal';
      if (goal.completed) item.classList.add('done');
      if (goal.sync !== 'synced') item.classList.add(goal.sync);

      const mark = document.createElement('span');
      mark.className = 'mark';
      mark.textContent = goal.completed ? '●' : '○';

      const title = document.createElement('span');
      title.className = 'title';
      title.textContent = goal.title;

      const remove = document.createElement('button');
      remove.className = 'delete';
      remove.type = 'button';
      remove.setAttribute('aria-label', 'Delete');
      remove.textContent = '✕';

      if (goal.key.kind === 'remote') {
        title.addEventListener('click', () => {
          run(() => send('/api/goals/toggle', { key: goal.key, completed: goal.completed }));
        });
        remove.addEventListener('click', () => {
          const confirmed = window.confirm('Delete goal?');
          if (confirmed) {
            run(() => send('/api/goals/delete', { key: goal.key, confirmed }));
          }
        });
      }

      item.append(mark, title, remove);
      return item;
    };

    const render = (view, seq) => {
      if (!view || seq < rendered) return;
      rendered = seq;

      dayLabel.textContent = view.label;
      input.placeholder = `Goal for ${view.label}...`;
      progressBar.style.width = `${view.progress}%`;
      progressText.textContent = `${view.progress}% DONE`;
      errorBox.hidden = !view.error;
      errorBox.textContent = view.error || '';
      loadingBox.hidden = !(view.loading && view.goals.length === 0);
      emptyBox.hidden = view.loading || view.goals.length > 0;
      refreshButton.classList.toggle('spinning', view.loading);
      list.replaceChildren(...view.goals.map(renderGoal));

      if (view.alert) window.alert(view.alert);
    };

    const request = async (path, options, seq = ++issued) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      render(await res.json(), seq);
    };

    const send = (path, body) =>
      request(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });


    const run = (action) => {
      action().catch((err) => {
        errorBox.hidden = false;
        errorBox.textContent = err.message;
      });
    };

    const syncAddButton = () => {
      addButton.disabled = input.value.length === 0;
    };

    refreshButton.addEventListener('click', () => run(() => send('/api/reload')));
    const shiftDay = (delta) => run(() => send('/api/day', { delta }));
    document.getElementById('prev-day').addEventListener('click', () => shiftDay(-1));
    document.getElementById('next-day').addEventListener('click', () => shiftDay(1));
    input.addEventListener('input', syncAddButton);

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const title = input.value;
      if (!title.trim()) return;
      input.value = '';
      syncAddButton();
      // The preview shows the provisional entry unless the save answers first.
      const previewSeq = ++issued;
      const saving = send('/api/goals', { title });
      run(() => request('/api/session', undefined, previewSeq));
      run(() => saving);
    });

    syncAddButton();
    render(initialView, 0);
  </script>
</body>
</html>
"#;
