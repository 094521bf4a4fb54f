//! Application configuration.
//!
//! Centralized configuration for the LevelUp frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Analysis endpoint.
///
/// The hosted LevelUp backend that turns a document + goal into a
/// Markdown report.
pub const ANALYZE_URL: &str = "https://levelup-backend-a02d.onrender.com";

/// Application name.
///
/// Used for the page title and exported document titles.
pub const APP_NAME: &str = "LevelUp";

/// File extensions accepted by the upload picker.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.txt";

/// Base name for exported artifacts (`analysis.md`, `analysis.html`, ...).
pub const EXPORT_FILE_STEM: &str = "analysis";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Delay before triggering the print dialog, giving the print window
/// time to lay out the written document (in milliseconds).
pub const PRINT_DELAY_MS: u32 = 300;

/// Onboarding document shown in the results panel before the first
/// analysis arrives.
pub const WELCOME_MARKDOWN: &str = r#"
# Welcome to Your Career Analysis

Upload your resume and enter a description to get started.

## How it works

1. **Drag & Drop** your resume file into the upload zone
2. **Enter your description** in the text field
3. **View results** in this area once processing is complete

---

### Sample Analysis Output

Once you upload your files, you'll see:

- **Skills Assessment** - A breakdown of your current skills
- **Gap Analysis** - Skills you need to develop
- **Recommendations** - Actionable steps to reach your goal

```
Example skill match: 85%
Top missing skills: Leadership, Data Analysis
```

> Pro tip: The more detailed your description, the better the analysis!
"#;
