//! Render Use Case
//!
//! Builds a `NavigationTree` from a menu definition, applies caller
//! overrides and renders it with the renderer for the chosen format.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{ConfigWarning, ItemConfig, MenuConfig};
use crate::domain::entities::{NavigationTree, NewNode, NodeId};
use crate::domain::value_objects::SortMode;
use crate::error::{NavError, NavResult};
use crate::infrastructure::{renderer_for, MessageCatalog, OutputFormat};

/// Overrides applied on top of the menu definition
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Output format (defaults to `[output] format`)
    pub format: Option<OutputFormat>,
    /// Sort mode applied to every node after the tree is built
    pub sort: Option<SortMode>,
    /// Label path of the current item, replacing `[navigation] current`
    pub current: Option<Vec<String>>,
    /// Template replacing `[navigation] template`
    pub template: Option<PathBuf>,
    /// Catalog merged over the inline `[translations]`
    pub catalog: Option<MessageCatalog>,
}

/// Result of the render operation
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub format: OutputFormat,
    pub content: String,
    pub node_count: usize,
}

/// Render Use Case
pub struct RenderUseCase {
    config: MenuConfig,
    base_dir: PathBuf,
}

impl RenderUseCase {
    /// Create a use case for an in-memory menu; relative paths resolve
    /// against the working directory
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            base_dir: PathBuf::new(),
        }
    }

    /// Load a menu file with `NAVTREE_*` overrides applied.
    ///
    /// A relative template path in the file resolves against the file's
    /// directory.
    pub fn from_file(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        let (config, warnings) = MenuConfig::load_with_warnings(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok((
            Self {
                config: config.with_env_overrides(),
                base_dir,
            },
            warnings,
        ))
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Build the tree with all overrides applied, without rendering it
    pub fn build(&self, options: &RenderOptions) -> NavResult<NavigationTree> {
        let mut tree = build_tree(&self.config)?;

        if let Some(mode) = options.sort {
            tree.sort_by(mode, true);
        }

        if let Some(path) = &options.current {
            mark_current_path(&mut tree, path.as_slice())?;
        }

        if let Some(template) = &options.template {
            tree.set_template(template);
        } else if let Some(template) = &self.config.navigation.template {
            tree.set_template(self.base_dir.join(template));
        }

        let mut catalog = MessageCatalog::from_messages(self.config.translations.clone());
        if let Some(extra) = &options.catalog {
            catalog.merge(extra.clone());
        }
        if !catalog.is_empty() {
            debug!(entries = catalog.len(), "label translations enabled");
            tree.set_translator(catalog);
        }

        Ok(tree)
    }

    /// Execute the render operation
    pub fn execute(&self, options: &RenderOptions) -> NavResult<RenderOutput> {
        let format = options.format.unwrap_or(self.config.output.format);
        let mut tree = self.build(options)?;
        let node_count = tree.node_count();

        info!(?format, nodes = node_count, "rendering navigation");
        let content = tree.render(renderer_for(format).as_ref())?;

        Ok(RenderOutput {
            format,
            content,
            node_count,
        })
    }
}

/// Build a tree from a menu definition.
///
/// The root takes `[navigation] sort` and `default_priority` before any
/// item is added, so every item inherits them unless it sets its own.
/// No translator or template is attached.
pub fn build_tree(config: &MenuConfig) -> NavResult<NavigationTree> {
    let nav = &config.navigation;
    let mut tree = NavigationTree::with_root(nav.root_label.as_str(), nav.root_url.as_str())?;
    tree.sort_by(nav.sort, false);
    if let Some(priority) = config.default_priority()? {
        tree.root_mut().set_default_priority(priority);
    }

    let root = tree.root();
    for item in &config.items {
        add_item(&mut tree, root, item)?;
    }

    if !nav.current.is_empty() {
        mark_current_path(&mut tree, nav.current.as_slice())?;
    }

    debug!(nodes = tree.node_count(), "navigation tree built");
    Ok(tree)
}

fn add_item(tree: &mut NavigationTree, parent: NodeId, item: &ItemConfig) -> NavResult<NodeId> {
    let mut spec = NewNode::new(item.label.as_str());
    spec.url = item.url.clone();
    spec.priority = item.priority()?;
    spec.sort_mode = item.sort;

    let id = tree.add_child(parent, spec)?;
    for child in &item.children {
        add_item(tree, id, child)?;
    }
    Ok(id)
}

/// Flag the node at `path` (labels below the root) as current
fn mark_current_path<S: AsRef<str>>(tree: &mut NavigationTree, path: &[S]) -> NavResult<()> {
    let id = tree.find_path(path).ok_or_else(|| NavError::PathNotFound {
        path: path
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("/"),
    })?;
    tree.set_current(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_with_warnings;
    use crate::domain::value_objects::Priority;
    use std::fs;
    use tempfile::tempdir;

    const MENU: &str = r#"
[navigation]
root_label = "Home"
root_url = "/"
default_priority = 50

[[items]]
label = "Blog"
url = "/blog"
priority = 30
sort = "label"

  [[items.children]]
  label = "Rust"

  [[items.children]]
  label = "Go"

[[items]]
label = "About"
url = "/about"
priority = 10
"#;

    fn use_case(content: &str) -> RenderUseCase {
        let (config, _) = parse_with_warnings(content, Path::new("menu.toml")).unwrap();
        RenderUseCase::new(config)
    }

    #[test]
    fn build_tree_creates_nested_items() {
        let (config, _) = parse_with_warnings(MENU, Path::new("menu.toml")).unwrap();
        let tree = build_tree(&config).unwrap();

        assert_eq!(tree.node_count(), 5);
        let blog = tree.find_path(&["Blog"]).unwrap();
        assert_eq!(tree[blog].url(), "/blog");
        assert_eq!(tree[blog].sort_mode(), SortMode::Label);
        assert!(tree.find_path(&["Blog", "Go"]).is_some());
    }

    #[test]
    fn items_inherit_root_defaults() {
        let (config, _) = parse_with_warnings(MENU, Path::new("menu.toml")).unwrap();
        let tree = build_tree(&config).unwrap();

        let rust = tree.find_path(&["Blog", "Rust"]).unwrap();
        assert_eq!(tree[rust].priority(), &Priority::Number(50.0));
        assert_eq!(tree[rust].sort_mode(), SortMode::Label);
        assert_eq!(tree[rust].url(), "#");
    }

    #[test]
    fn root_sort_mode_applies_before_items() {
        let content = "[navigation]\nsort = \"priority\"\n\n[[items]]\nlabel = \"A\"\n\n[[items]]\nlabel = \"B\"\nsort = \"none\"\n";
        let tree = build_tree(&use_case(content).config).unwrap();

        let a = tree.find_path(&["A"]).unwrap();
        let b = tree.find_path(&["B"]).unwrap();
        assert_eq!(tree[a].sort_mode(), SortMode::Priority);
        assert_eq!(tree[b].sort_mode(), SortMode::None);
    }

    #[test]
    fn current_path_marks_node() {
        let content = MENU.replacen(
            "default_priority = 50",
            "default_priority = 50\ncurrent = [\"Blog\", \"Rust\"]",
            1,
        );
        let tree = build_tree(&use_case(&content).config).unwrap();

        let rust = tree.find_path(&["Blog", "Rust"]).unwrap();
        assert_eq!(tree.current(), rust);
        assert!(tree[rust].is_current());
    }

    #[test]
    fn unknown_current_path_is_an_error() {
        let uc = use_case(MENU);
        let options = RenderOptions {
            current: Some(vec!["Blog".to_string(), "Python".to_string()]),
            ..RenderOptions::default()
        };

        let err = uc.build(&options).unwrap_err();

        assert!(matches!(err, NavError::PathNotFound { ref path } if path == "Blog/Python"));
    }

    #[test]
    fn invalid_priority_type_is_reported() {
        let uc = use_case("[[items]]\nlabel = \"Blog\"\npriority = { a = 1 }\n");
        let err = uc.build(&RenderOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            NavError::InvalidPriorityType { ref found, .. } if found == "table"
        ));
    }

    #[test]
    fn execute_renders_sorted_text() {
        let uc = use_case(MENU);
        let options = RenderOptions {
            sort: Some(SortMode::PriorityNumeric),
            ..RenderOptions::default()
        };

        let output = uc.execute(&options).unwrap();

        assert_eq!(output.format, OutputFormat::Text);
        assert_eq!(output.node_count, 5);
        let labels: Vec<&str> = output
            .content
            .lines()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(labels, vec!["Home", "About", "Blog", "Rust", "Go"]);
    }

    #[test]
    fn execute_uses_configured_format() {
        let uc = use_case("[output]\nformat = \"json\"\n\n[[items]]\nlabel = \"Blog\"\n");
        let output = uc.execute(&RenderOptions::default()).unwrap();

        assert_eq!(output.format, OutputFormat::Json);
        assert!(output.content.starts_with('{'));

        let html = uc
            .execute(&RenderOptions {
                format: Some(OutputFormat::Html),
                ..RenderOptions::default()
            })
            .unwrap();
        assert!(html.content.starts_with("<ul"));
    }

    #[test]
    fn translations_drive_label_sort() {
        let content = "[navigation]\nsort = \"label\"\n\n[translations]\nHome = \"Domov\"\n\n[[items]]\nlabel = \"Zebra\"\n\n[[items]]\nlabel = \"Yak\"\n";
        let uc = use_case(content);
        let catalog = MessageCatalog::from_messages([("Zebra", "Antilopa")]);

        let output = uc
            .execute(&RenderOptions {
                catalog: Some(catalog),
                ..RenderOptions::default()
            })
            .unwrap();

        let labels: Vec<&str> = output
            .content
            .lines()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(labels, vec!["Domov", "Antilopa", "Yak"]);
    }

    #[test]
    fn template_resolves_against_menu_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("layout.html"),
            "<nav>{{ navigation }}</nav>\n",
        )
        .unwrap();
        let menu = dir.path().join("menu.toml");
        fs::write(
            &menu,
            "[navigation]\ntemplate = \"layout.html\"\n\n[output]\nformat = \"html\"\n",
        )
        .unwrap();

        let (uc, warnings) = RenderUseCase::from_file(&menu).unwrap();
        assert!(warnings.is_empty());

        let output = uc
            .execute(&RenderOptions {
                format: Some(OutputFormat::Html),
                ..RenderOptions::default()
            })
            .unwrap();
        assert!(output.content.starts_with("<nav><ul class=\"navigation\">"), "{}", output.content);
        assert!(output.content.ends_with("</ul></nav>\n"), "{}", output.content);
    }
}
