use std::path::Path;

pub const EXECUTION_INSTRUCTIONS_FILE: &str = "EXECUTION.md";

pub fn is_execution_instructions_file(file_path: &str) -> bool {
    Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn run_guidance(project_type: &str) -> &'static str {
    let normalized = project_type.trim().to_ascii_lowercase();
    if normalized.contains("web")
        || normalized.contains("html")
        || normalized.contains("site")
        || normalized.contains("frontend")
    {
        "Open `index.html` in a browser, or serve the directory with any static file server (for example `python3 -m http.server`) and visit the printed address."
    } else if normalized.contains("node") || normalized.contains("javascript") {
        "Install dependencies with `npm install`, then start the project with `npm start` (or `node index.js` if no start script is defined)."
    } else if normalized.contains("python") {
        "Create a virtual environment if you use one, install any listed requirements with `pip install -r requirements.txt`, then run `python main.py`."
    } else {
        "Inspect the generated files for an entry point and run it with the matching toolchain for this project type."
    }
}

pub fn render_execution_instructions(project_name: &str, project_type: &str) -> String {
    let name = if project_name.trim().is_empty() {
        "this project"
    } else {
        project_name
    };
    let type_label = if project_type.trim().is_empty() {
        "generated"
    } else {
        project_type
    };
    format!(
        "# Running {name}\n\n\
         This is a {type_label} project generated from a natural-language request.\n\n\
         ## How to run\n\n\
         {guidance}\n\n\
         ## Making changes\n\n\
         Ask the agent to update the project and describe the issue; it will\n\
         regenerate the affected file in place.\n",
        name = name,
        type_label = type_label,
        guidance = run_guidance(project_type),
    )
}
