//! Name-convention tables and the pure predicates built on them.
//!
//! Every heuristic the extractor applies to identifiers, callee names, and
//! tag names lives here so the rule set can be read and tested in one place.

use crate::types::PropType;

// ── Wrapper markers ────────────────────────────────────────────────

pub const MEMO_MARKERS: &[&str] = &["memo", "React.memo"];
pub const FORWARD_REF_MARKERS: &[&str] = &["forwardRef", "React.forwardRef"];

// ── Hook tables (bare names; `React.` is stripped first) ───────────

pub const STATE_HOOKS: &[&str] = &["useState", "useReducer"];
pub const EFFECT_HOOKS: &[&str] = &["useEffect", "useLayoutEffect"];
pub const REF_HOOKS: &[&str] = &["useRef"];
pub const CALLBACK_HOOKS: &[&str] = &["useCallback"];
pub const CONTEXT_READ_HOOKS: &[&str] = &["useContext"];
pub const FORM_HOOKS: &[&str] = &["useForm"];
pub const ROUTER_HOOKS: &[&str] = &[
    "useNavigate",
    "useLocation",
    "useParams",
    "useSearchParams",
    "useRouter",
    "useHistory",
    "usePathname",
    "useMatch",
];

/// React's own primitives: never reported as custom hooks.
pub const BUILTIN_HOOKS: &[&str] = &[
    "useState",
    "useReducer",
    "useEffect",
    "useLayoutEffect",
    "useInsertionEffect",
    "useRef",
    "useCallback",
    "useMemo",
    "useContext",
    "useId",
    "useTransition",
    "useDeferredValue",
    "useImperativeHandle",
    "useDebugValue",
    "useSyncExternalStore",
    "useOptimistic",
    "useActionState",
    "useFormStatus",
];

// ── Network calls ──────────────────────────────────────────────────

pub const NETWORK_CALLEES: &[&str] = &["fetch", "axios"];
pub const HTTP_VERBS: &[&str] = &["get", "post", "put", "patch", "delete"];

// ── State and prop naming ──────────────────────────────────────────

pub const LOADING_STATE_MARKERS: &[&str] = &["loading", "fetching"];
pub const ERROR_STATE_MARKERS: &[&str] = &["error", "err"];

/// Prefixes that mark a boolean when followed by an uppercase letter.
pub const BOOLEAN_PREFIXES: &[&str] = &[
    "is", "has", "should", "can", "show", "hide", "enable", "disable", "allow",
];

// ── Markup tags ────────────────────────────────────────────────────

pub const BUTTON_TAGS: &[&str] = &["button", "Button"];
pub const INPUT_TAGS: &[&str] = &["input", "Input"];
pub const TEXTAREA_TAGS: &[&str] = &["textarea", "Textarea", "TextArea"];
pub const SELECT_TAGS: &[&str] = &["select", "Select"];
pub const FORM_TAGS: &[&str] = &["form", "Form"];
pub const LINK_TAGS: &[&str] = &["a", "Link", "NavLink"];
pub const IMAGE_TAGS: &[&str] = &["img", "Image"];

/// Markup classification of a tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Button,
    Input,
    TextArea,
    Select,
    Form,
    Link,
    Image,
}

pub fn classify_tag(tag: &str) -> Option<TagClass> {
    if BUTTON_TAGS.contains(&tag) {
        Some(TagClass::Button)
    } else if INPUT_TAGS.contains(&tag) {
        Some(TagClass::Input)
    } else if TEXTAREA_TAGS.contains(&tag) {
        Some(TagClass::TextArea)
    } else if SELECT_TAGS.contains(&tag) {
        Some(TagClass::Select)
    } else if FORM_TAGS.contains(&tag) {
        Some(TagClass::Form)
    } else if LINK_TAGS.contains(&tag) {
        Some(TagClass::Link)
    } else if IMAGE_TAGS.contains(&tag) {
        Some(TagClass::Image)
    } else {
        None
    }
}

// ── Predicates ─────────────────────────────────────────────────────

fn uppercase_after(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// Component: starts with uppercase letter.
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// React hook: `use` followed by an uppercase letter.
pub fn is_hook_name(name: &str) -> bool {
    uppercase_after(name, "use")
}

/// `React.useState` → `useState`.
pub fn normalize_hook_name(callee: &str) -> &str {
    callee.strip_prefix("React.").unwrap_or(callee)
}

/// `useAuthContext` → `AuthContext`.
pub fn context_from_hook_name(name: &str) -> Option<String> {
    if !is_hook_name(name) || !name.ends_with("Context") || name.len() <= "useContext".len() {
        return None;
    }
    name.strip_prefix("use").map(str::to_string)
}

pub fn is_router_hook(name: &str) -> bool {
    ROUTER_HOOKS.contains(&name)
}

pub fn is_form_hook(name: &str) -> bool {
    FORM_HOOKS.contains(&name)
}

/// A `use[A-Z]` call that is not one of the recognized primitives.
pub fn is_custom_hook(name: &str) -> bool {
    is_hook_name(name)
        && !BUILTIN_HOOKS.contains(&name)
        && !is_router_hook(name)
        && !is_form_hook(name)
        && context_from_hook_name(name).is_none()
}

/// `fetch(...)`, `axios(...)`, `axios.get(...)`, `api.post(...)`.
pub fn is_network_callee(callee: &str) -> bool {
    if NETWORK_CALLEES.contains(&callee) {
        return true;
    }
    callee
        .rsplit_once('.')
        .is_some_and(|(object, verb)| !object.is_empty() && HTTP_VERBS.contains(&verb))
}

/// `onSave`, `onChange`: the callback prop convention.
pub fn is_callback_name(name: &str) -> bool {
    uppercase_after(name, "on")
}

/// `handleSubmit`, `handle`, `onClose`; never a component-shaped name.
pub fn is_handler_name(name: &str) -> bool {
    !is_component_name(name) && (name.starts_with("handle") || is_callback_name(name))
}

pub fn is_boolean_name(name: &str) -> bool {
    BOOLEAN_PREFIXES.iter().any(|p| uppercase_after(name, p))
}

pub fn is_loading_state(name: &str) -> bool {
    let lower = name.to_lowercase();
    LOADING_STATE_MARKERS.iter().any(|m| lower.contains(m))
}

pub fn is_error_state(name: &str) -> bool {
    let lower = name.to_lowercase();
    ERROR_STATE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Whether declared type text describes a function.
pub fn is_function_type(type_text: &str) -> bool {
    type_text.contains("=>") || type_text == "Function"
}

/// Guess a prop type from the literal shape of its default value.
pub fn infer_default_type(default: &str) -> Option<PropType> {
    let text = default.trim();
    if text == "true" || text == "false" {
        Some(PropType::Boolean)
    } else if looks_numeric(text) {
        Some(PropType::Number)
    } else if text.starts_with(['"', '\'', '`']) {
        Some(PropType::String)
    } else if text.starts_with('[') {
        Some(PropType::Array)
    } else if text.starts_with('{') {
        Some(PropType::Object)
    } else {
        None
    }
}

/// Guess a prop type from its name alone.
pub fn infer_name_type(name: &str) -> PropType {
    if is_callback_name(name) {
        PropType::Function
    } else if is_boolean_name(name) {
        PropType::Boolean
    } else {
        PropType::Unknown
    }
}

/// Default shape first, then naming convention.
pub fn infer_prop_type(name: &str, default: Option<&str>) -> PropType {
    default
        .and_then(infer_default_type)
        .unwrap_or_else(|| infer_name_type(name))
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty()
        && digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && digits.replace('_', "").parse::<f64>().is_ok()
}
