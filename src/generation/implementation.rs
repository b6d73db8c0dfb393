//! Component implementation blocks, one shape per archetype.

use crate::archetype::{
    Archetype, ButtonSize, ButtonVariant, BUTTON_BASE_TOKENS, CARD_BASE_TOKENS,
    GENERIC_BASE_TOKENS, INPUT_BASE_TOKENS, MODAL_PANEL_TOKENS,
};

pub fn render_implementation(archetype: &Archetype, name: &str) -> String {
    match archetype {
        Archetype::Button => button(name),
        Archetype::Card => card(name),
        Archetype::Input => input(name),
        Archetype::Modal => modal(name),
        Archetype::Generic(_) => generic(name),
    }
}

/// Component header with the destructured parameter list; unconsumed props
/// are always collected into `...props`.
fn header(name: &str, params: &[&str]) -> Vec<String> {
    let mut lines = vec![format!(
        "export const {}: React.FC<{}Props> = ({{",
        name, name
    )];
    lines.extend(params.iter().map(|p| format!("  {},", p)));
    lines.push("  ...props".to_string());
    lines.push("}) => {".to_string());
    lines
}

fn token_table<'a>(
    binding: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<String> {
    let entries: Vec<String> = entries
        .map(|(key, tokens)| format!("    {}: '{}'", key, tokens))
        .collect();
    let mut lines = vec![format!("  const {} = {{", binding)];
    lines.push(entries.join(",\n"));
    lines.push("  };".to_string());
    lines
}

fn button(name: &str) -> String {
    let mut lines = header(
        name,
        &[
            "children",
            "className",
            "variant = 'default'",
            "size = 'default'",
            "onClick",
            "disabled = false",
        ],
    );
    lines.extend(token_table(
        "variants",
        ButtonVariant::ALL.iter().map(|v| (v.key(), v.tokens())),
    ));
    lines.push(String::new());
    lines.extend(token_table(
        "sizes",
        ButtonSize::ALL.iter().map(|s| (s.key(), s.tokens())),
    ));
    lines.push(String::new());
    lines.push(format!(
        r#"  return (
    <button
      className={{cn(
        '{}',
        variants[variant],
        sizes[size],
        className
      )}}
      onClick={{onClick}}
      disabled={{disabled}}
      {{...props}}
    >
      {{children}}
    </button>
  );
}};"#,
        BUTTON_BASE_TOKENS
    ));
    lines.join("\n")
}

fn card(name: &str) -> String {
    let mut lines = header(name, &["children", "className", "title", "content"]);
    lines.push(format!(
        r#"  return (
    <div
      className={{cn(
        '{}',
        className
      )}}
      {{...props}}
    >
      {{title && (
        <div className="flex flex-col space-y-1.5 p-6 pb-2">
          <h3 className="text-2xl font-semibold leading-none tracking-tight">
            {{title}}
          </h3>
        </div>
      )}}
      <div className="p-6 pt-0">
        {{content && <p className="text-sm text-muted-foreground">{{content}}</p>}}
        {{children}}
      </div>
    </div>
  );
}};"#,
        CARD_BASE_TOKENS
    ));
    lines.join("\n")
}

fn input(name: &str) -> String {
    let mut lines = header(
        name,
        &[
            "className",
            "type = 'text'",
            "placeholder",
            "value",
            "onChange",
            "disabled = false",
        ],
    );
    lines.push(format!(
        r#"  return (
    <input
      type={{type}}
      className={{cn(
        '{}',
        className
      )}}
      placeholder={{placeholder}}
      value={{value}}
      onChange={{onChange}}
      disabled={{disabled}}
      {{...props}}
    />
  );
}};"#,
        INPUT_BASE_TOKENS
    ));
    lines.join("\n")
}

fn modal(name: &str) -> String {
    let mut lines = header(
        name,
        &["children", "className", "isOpen", "onClose", "title", "content"],
    );
    lines.push(format!(
        r#"  if (!isOpen) return null;

  return (
    <div className="fixed inset-0 z-50 flex items-center justify-center">
      <div
        className="fixed inset-0 bg-black/80"
        onClick={{onClose}}
      />
      <div
        className={{cn(
          '{}',
          className
        )}}
        {{...props}}
      >
        {{title && (
          <div className="flex flex-col space-y-1.5 text-center sm:text-left">
            <h2 className="text-lg font-semibold">{{title}}</h2>
          </div>
        )}}
        <div className="grid gap-4 py-4">
          {{content && <p className="text-sm text-muted-foreground">{{content}}</p>}}
          {{children}}
        </div>
      </div>
    </div>
  );
}};"#,
        MODAL_PANEL_TOKENS
    ));
    lines.join("\n")
}

fn generic(name: &str) -> String {
    let mut lines = header(name, &["children", "className"]);
    lines.push(format!(
        r#"  return (
    <div className={{cn('{}', className)}} {{...props}}>
      {{children}}
    </div>
  );
}};"#,
        GENERIC_BASE_TOKENS
    ));
    lines.join("\n")
}
