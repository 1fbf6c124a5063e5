use crate::chart::render_svg;
use crate::models::DailyRecord;
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::fmt::Write;

pub fn render_index(today: NaiveDate, store: &RecordStore, notice: Option<&str>) -> String {
    let summary = store.aggregate();
    let notice = notice
        .map(|text| format!(r#"<p class="status" data-type="ok" role="status">{text}</p>"#))
        .unwrap_or_default();
    INDEX_HTML
        .replace("{{NOTICE}}", &notice)
        .replace("{{TODAY}}", &today.to_string())
        .replace("{{ROWS}}", &render_rows(store.all()))
        .replace("{{CHART}}", &render_svg(&store.chart_points()))
        .replace("{{TOTAL_NOTES}}", &summary.total_note_count.to_string())
        .replace("{{TOTAL_VIEWS}}", &summary.total_views.to_string())
        .replace("{{AVG_RATE}}", &summary.average_engagement_display)
        .replace("{{RECORD_COUNT}}", &summary.record_count.to_string())
}

fn render_rows(records: &[DailyRecord]) -> String {
    if records.is_empty() {
        return r#"<tr><td class="empty" colspan="7">No data yet</td></tr>"#.to_string();
    }

    records.iter().fold(String::new(), |mut rows, record| {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}%</td></tr>",
            record.date,
            record.note_count,
            record.views,
            record.likes,
            record.comments,
            record.ad_cost,
            record.engagement_rate,
        );
        rows
    })
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Engagement Board</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff2442;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1180px, 100%);
      margin: 0 auto;
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .columns {
      display: grid;
      grid-template-columns: minmax(260px, 1fr) 2fr;
      gap: 28px;
    }

    form.entry {
      display: grid;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
    }

    input {
      font: inherit;
      font-size: 1rem;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      color: var(--ink);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 36, 66, 0.3);
    }

    button.secondary {
      background: transparent;
      color: var(--accent-2);
      box-shadow: none;
      padding: 8px 0;
      font-size: 0.9rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      overflow-x: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: right;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    th:first-child, td:first-child {
      text-align: left;
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
    }

    td.empty {
      text-align: center;
      color: #8b857d;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-axis {
      stroke: rgba(47, 72, 88, 0.25);
      stroke-dasharray: 4 6;
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.rate {
      color: var(--accent);
    }

    .status {
      margin: 0;
      font-size: 0.95rem;
      color: #6b645d;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @media (max-width: 800px) {
      .columns {
        grid-template-columns: 1fr;
      }
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Engagement Board</h1>
      <p class="subtitle">Log daily post metrics and watch the engagement rate trend.</p>
    </header>

    <div class="columns">
      <section>
        <h2>New entry</h2>
        {{NOTICE}}
        <form class="entry" method="post" action="/records">
          <label>Date <input type="date" name="date" value="{{TODAY}}" /></label>
          <label>Notes posted <input type="number" name="note_count" min="0" step="1" value="0" required /></label>
          <label>Views <input type="number" name="views" min="0" step="1" value="0" required /></label>
          <label>Likes <input type="number" name="likes" min="0" step="1" value="0" required /></label>
          <label>Comments <input type="number" name="comments" min="0" step="1" value="0" required /></label>
          <label>Ad cost <input type="number" name="ad_cost" min="0" step="0.01" value="0" required /></label>
          <button type="submit">Submit</button>
        </form>
        <form method="post" action="/session/end">
          <button class="secondary" type="submit">End session</button>
        </form>
      </section>

      <section>
        <h2>Records ({{RECORD_COUNT}})</h2>
        <div class="card">
          <table>
            <thead>
              <tr>
                <th>Date</th>
                <th>Notes</th>
                <th>Views</th>
                <th>Likes</th>
                <th>Comments</th>
                <th>Ad cost</th>
                <th>Engagement</th>
              </tr>
            </thead>
            <tbody>{{ROWS}}</tbody>
          </table>
        </div>
      </section>
    </div>

    <section>
      <h2>Engagement rate trend</h2>
      <div class="card">{{CHART}}</div>
    </section>

    <section class="metrics">
      <div class="stat">
        <span class="label">Total notes</span>
        <span id="total-notes" class="value">{{TOTAL_NOTES}}</span>
      </div>
      <div class="stat">
        <span class="label">Total views</span>
        <span id="total-views" class="value">{{TOTAL_VIEWS}}</span>
      </div>
      <div class="stat">
        <span class="label">Average engagement</span>
        <span id="avg-rate" class="value rate">{{AVG_RATE}}</span>
      </div>
    </section>

    <p class="hint">Engagement rate is (likes + comments) / views. Records last for this browser session only.</p>
  </main>
</body>
</html>
"#;
