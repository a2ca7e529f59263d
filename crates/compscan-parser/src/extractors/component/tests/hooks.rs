use pretty_assertions::assert_eq;

use super::*;
use crate::types::{EffectDescriptor, HandlerDescriptor, StateDescriptor};

// ── State ──────────────────────────────────────────────────────────

#[test]
fn use_state_pair_with_initial_value() {
    let meta = extract_one(
        "function Counter() {\n  const [count, setCount] = useState(0);\n  return <button>{count}</button>;\n}",
    );
    assert_eq!(
        meta.state,
        vec![StateDescriptor {
            name: "count".to_string(),
            setter: "setCount".to_string(),
            initial_value: Some("0".to_string()),
        }]
    );
}

#[test]
fn state_without_initial_value_and_qualified_callee() {
    let meta = extract_one(
        "function Form() {\n  const [value, setValue] = React.useState();\n  return <input />;\n}",
    );
    assert_eq!(meta.state.len(), 1);
    assert_eq!(meta.state[0].initial_value, None);
}

#[test]
fn use_reducer_takes_second_argument() {
    let meta = extract_one(
        "function Cart() {\n  const [state, dispatch] = useReducer(reducer, { items: [] });\n  return <ul />;\n}",
    );
    assert_eq!(meta.state[0].name, "state");
    assert_eq!(meta.state[0].setter, "dispatch");
    assert_eq!(meta.state[0].initial_value.as_deref(), Some("{ items: [] }"));
}

#[test]
fn non_pair_destructuring_is_not_state() {
    let meta = extract_one(
        "function A() {\n  const [only] = useState(1);\n  const all = useState(2);\n  return <b />;\n}",
    );
    assert!(meta.state.is_empty());
}

#[test]
fn loading_and_error_state_markers() {
    let meta = extract_one(
        "function Page() {\n  const [isFetching, setIsFetching] = useState(false);\n  const [submitErr, setSubmitErr] = useState(null);\n  return <main />;\n}",
    );
    assert!(meta.has_loading_state);
    assert!(meta.has_error_state);

    let plain = extract_one(
        "function Page() {\n  const [count, setCount] = useState(0);\n  return <main />;\n}",
    );
    assert!(!plain.has_loading_state);
    assert!(!plain.has_error_state);
}

// ── Effects ────────────────────────────────────────────────────────

#[test]
fn effect_dependency_lists() {
    let meta = extract_one(
        "function Feed() {\n  useEffect(() => {}, []);\n  useEffect(() => {}, [a, b.c]);\n  useLayoutEffect(() => {});\n  return <div />;\n}",
    );
    assert_eq!(
        meta.effects,
        vec![
            EffectDescriptor {
                deps: vec![],
                is_empty: true,
            },
            EffectDescriptor {
                deps: vec!["a".to_string(), "b.c".to_string()],
                is_empty: false,
            },
            EffectDescriptor {
                deps: vec![],
                is_empty: false,
            },
        ]
    );
}

#[test]
fn non_array_dependencies_are_not_empty() {
    let meta = extract_one(
        "function Feed() {\n  useEffect(() => {}, deps);\n  return <div />;\n}",
    );
    assert_eq!(meta.effects.len(), 1);
    assert!(meta.effects[0].deps.is_empty());
    assert!(!meta.effects[0].is_empty);
}

// ── Refs, routing, forms, contexts, custom hooks ───────────────────

#[test]
fn refs_and_dependency_usage() {
    let meta = extract_one(
        "function Editor() {\n  const inputRef = useRef(null);\n  const { id } = useParams();\n  const form = useForm();\n  const auth = useAuthContext();\n  const theme = useContext(ThemeContext);\n  const cart = useCart();\n  const data = useFetch('/api');\n  const memo = useMemo(() => 1, []);\n  return <input ref={inputRef} />;\n}",
    );
    assert_eq!(meta.refs, vec!["inputRef"]);
    assert!(meta.uses_router);
    assert!(meta.uses_form);
    assert_eq!(meta.contexts, vec!["AuthContext", "ThemeContext"]);
    assert_eq!(meta.custom_hooks, vec!["useCart", "useFetch"]);
}

#[test]
fn destructured_ref_is_ignored() {
    let meta = extract_one(
        "function A() {\n  const { current } = useRef(null);\n  return <b />;\n}",
    );
    assert!(meta.refs.is_empty());
}

#[test]
fn network_calls_are_recorded() {
    let meta = extract_one(
        "function Users() {\n  useEffect(() => {\n    fetch('/users');\n    axios.post('/log', {});\n    client.users.delete(1);\n    console.log('x');\n  }, []);\n  return <ul />;\n}",
    );
    assert_eq!(meta.api_calls, vec!["fetch", "axios.post", "client.users.delete"]);
}

// ── Handlers ───────────────────────────────────────────────────────

#[test]
fn handlers_bound_in_body() {
    let meta = extract_one(
        "function Form() {\n  const handleSubmit = async (e) => { e.preventDefault(); };\n  const onReset = useCallback(() => {}, []);\n  function handleBlur() {}\n  const handleValue = 42;\n  const submit = () => {};\n  return <form onSubmit={handleSubmit} />;\n}",
    );
    assert_eq!(
        meta.handlers,
        vec![
            HandlerDescriptor {
                name: "handleSubmit".to_string(),
                is_async: true,
            },
            HandlerDescriptor {
                name: "onReset".to_string(),
                is_async: false,
            },
            HandlerDescriptor {
                name: "handleBlur".to_string(),
                is_async: false,
            },
        ]
    );
}

#[test]
fn async_callback_handler() {
    let meta = extract_one(
        "function Save() {\n  const handleSave = useCallback(async () => { await save(); }, []);\n  return <button onClick={handleSave} />;\n}",
    );
    assert_eq!(meta.handlers.len(), 1);
    assert!(meta.handlers[0].is_async);
}

#[test]
fn nested_handlers_are_not_collected() {
    let meta = extract_one(
        "function List() {\n  const render = () => {\n    const handleClick = () => {};\n    return handleClick;\n  };\n  return <ul />;\n}",
    );
    assert!(meta.handlers.is_empty());
}

#[test]
fn expression_bodied_arrow_has_no_handlers() {
    let meta = extract_one("const Chip = ({ onClick }) => <button onClick={onClick} />;");
    assert!(meta.handlers.is_empty());
    assert!(meta.state.is_empty());
}
