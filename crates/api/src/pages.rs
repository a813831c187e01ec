//! Server-rendered views: Home, Predictor and Help, mirroring the three-entry
//! menu of the original front end.

use mslp_models::{KickoffHour, MatchDay, Prediction, RawSelection, Team, Venue};

const FIXTURES_URL: &str =
    "https://www.aiscore.com/tournament-malaysian-super-league/w34kgmi2y1h1ko9";

/// URL of a club's logo under the static assets mount. The files are named
/// after the club, so spaces and apostrophes need percent-encoding.
pub fn logo_url(team: Team) -> String {
    let encoded = team.name().replace(' ', "%20").replace('\'', "%27");
    format!("/assets/Club%20Logo/{encoded}.png")
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, active: &str, body: &str) -> String {
    let menu = ["Home", "Predictor", "Help"]
        .iter()
        .map(|item| {
            let href = match *item {
                "Home" => "/",
                "Predictor" => "/predictor",
                _ => "/help",
            };
            let class = if *item == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{item}</a>")
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 0; display: flex; }}
    nav {{ width: 12rem; min-height: 100vh; background: #f0f2f6; padding: 1rem; }}
    nav a {{ display: block; padding: 0.5rem; color: #262730; text-decoration: none; }}
    nav a.active {{ background: #ff4b4b; color: white; border-radius: 0.25rem; }}
    main {{ padding: 2rem; flex: 1; }}
    .warning {{ background: #fff3cd; border: 1px solid #ffec99; padding: 0.75rem; }}
    .win {{ background: #d1e7dd; border: 1px solid #a3cfbb; padding: 0.75rem; }}
    .lose {{ background: #f8d7da; border: 1px solid #f1aeb5; padding: 0.75rem; }}
    .teams {{ display: flex; gap: 3rem; margin: 1rem 0; }}
    select {{ display: block; margin: 0.5rem 0 1rem; min-width: 16rem; }}
    img.logo {{ width: 250px; }}
    img.banner {{ max-width: 100%; }}
  </style>
</head>
<body>
  <nav>
    <h3>Menu</h3>
      {menu}
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#
    )
}

fn options(values: impl IntoIterator<Item = String>, selected: Option<&str>) -> String {
    let mut out = String::from("<option value=\"\"></option>");
    for value in values {
        let escaped = html_escape(&value);
        let marker = if Some(value.as_str()) == selected { " selected" } else { "" };
        out.push_str(&format!("<option value=\"{escaped}\"{marker}>{escaped}</option>"));
    }
    out
}

pub fn home_page() -> String {
    let body = format!(
        r#"    <h1>Malaysia Super League Prediction System ⚽</h1>
    <img class="banner" src="/assets/MFL.JPG" alt="Malaysia Super League">
    <p>Football, the world's most popular sport, captivates billions of fans globally.
    Predicting match outcomes based on historical data is a challenge even for experts.
    Machine learning offers a solution, enabling more accurate predictions using team
    statistics, player metrics, and historical trends.</p>
    <h2>Upcoming Fixtures</h2>
    <p><a href="{FIXTURES_URL}">Click here to view upcoming fixtures</a></p>"#
    );
    layout("Football Prediction", "Home", &body)
}

pub fn help_page() -> String {
    let body = "    <h1>Help</h1>\n    <p>Pick your team, the opponent, venue, kickoff time \
                and day on the Predictor page, then press Predict.</p>";
    layout("Help", "Help", body)
}

/// The predictor form, optionally re-rendered with a warning or a result
/// after a submit. Selections the user already made stay selected.
pub fn predictor_page(
    raw: &RawSelection,
    warning: Option<&str>,
    result: Option<&Prediction>,
) -> String {
    let team_options = |selected: &Option<String>| {
        options(
            Team::ALL.iter().map(|t| t.name().to_string()),
            selected.as_deref(),
        )
    };

    let mut body = String::from("    <h1>Choose Your Team to Predict</h1>\n");

    if let Some(message) = warning {
        body.push_str(&format!(
            "    <p class=\"warning\">{}</p>\n",
            html_escape(message)
        ));
    }

    body.push_str(&format!(
        r#"    <form method="post" action="/predictor">
      <label>Select Team</label>
      <select name="home_team">{home}</select>
      <label>Select Opponent Team</label>
      <select name="away_team">{away}</select>
      <label>Select Venue (Home or Away)</label>
      <select name="venue">{venue}</select>
      <label>Select Time</label>
      <select name="kickoff">{kickoff}</select>
      <label>Select Day of Week</label>
      <select name="day">{day}</select>
      <button type="submit">Predict</button>
    </form>
"#,
        home = team_options(&raw.home_team),
        away = team_options(&raw.away_team),
        venue = options(
            Venue::ALL.iter().map(|v| v.name().to_string()),
            raw.venue.as_deref()
        ),
        kickoff = options(
            KickoffHour::ALL.iter().map(|k| k.label().to_string()),
            raw.kickoff.as_deref()
        ),
        day = options(
            MatchDay::ALL.iter().map(|d| d.name().to_string()),
            raw.day.as_deref()
        ),
    ));

    if let (Some(home), Some(away)) = (
        raw.home_team.as_ref().and_then(|n| Team::from_name(n)),
        raw.away_team.as_ref().and_then(|n| Team::from_name(n)),
    ) {
        body.push_str(&format!(
            r#"    <div class="teams">
      <div><h2>Team</h2><img class="logo" src="{}" alt="{}"></div>
      <div><h2>Opponent</h2><img class="logo" src="{}" alt="{}"></div>
    </div>
"#,
            logo_url(home),
            html_escape(home.name()),
            logo_url(away),
            html_escape(away.name()),
        ));
    }

    if let Some(prediction) = result {
        let (class, featured) = if prediction.outcome.is_win() {
            ("win", prediction.selection.home_team)
        } else {
            ("lose", prediction.selection.away_team)
        };
        body.push_str(&format!(
            r#"    <p class="{class}">Predicted Outcome: {outcome}</p>
    <img class="logo" src="{logo}" alt="{name}">
"#,
            outcome = prediction.outcome,
            logo = logo_url(featured),
            name = html_escape(featured.name()),
        ));
    }

    layout("Predictor", "Predictor", &body)
}
