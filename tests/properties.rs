use combo_path_decoder::{ComboRequest, DecodeError, FileType, Filter, GroupKind, decode};
use proptest::prelude::*;

fn version() -> impl Strategy<Value = String> {
  "[0-9a-z][0-9a-z.-]{0,11}"
}

fn modules() -> impl Strategy<Value = Vec<String>> {
  proptest::collection::vec("[a-z][a-z0-9-]{0,10}", 1..5)
}

fn file_type() -> impl Strategy<Value = FileType> {
  prop_oneof![Just(FileType::Js), Just(FileType::Css)]
}

fn decode_path(path: &str) -> Result<combo_path_decoder::DecodeResult, DecodeError> {
  decode(&ComboRequest::new(path))
}

proptest! {
  #[test]
  fn decoding_is_deterministic(path in "/[a-z0-9+;,./-]{0,40}") {
    prop_assert_eq!(decode_path(&path), decode_path(&path));
  }

  #[test]
  fn missing_filter_defaults_to_min(
    version in version(),
    modules in modules(),
    file_type in file_type(),
  ) {
    let path = format!("/core+{version}+{}.{file_type}", modules.join(","));
    let decoded = decode_path(&path).unwrap();
    prop_assert_eq!(decoded.filter, Filter::Min);
    prop_assert_eq!(decoded.file_type, file_type);
    prop_assert_eq!(&decoded.groups[0].modules, &modules);
  }

  #[test]
  fn explicit_filters_round_trip(
    version in version(),
    modules in modules(),
    file_type in file_type(),
    index in 0usize..3,
  ) {
    let filter = file_type.filters()[index % file_type.filters().len()];
    let path = format!("/core+{version}+{}.{filter}.{file_type}", modules.join(","));
    let decoded = decode_path(&path).unwrap();
    prop_assert_eq!(decoded.filter, filter);
    prop_assert_eq!(&decoded.groups[0].modules, &modules);
  }

  #[test]
  fn gallery_groups_are_prefixed(version in version(), modules in modules()) {
    let path = format!("/gallery+{version}+{}.js", modules.join(","));
    let decoded = decode_path(&path).unwrap();
    let group = &decoded.groups[0];

    prop_assert_eq!(group.name, GroupKind::Gallery);
    prop_assert_eq!(&group.version, &format!("gallery-{version}"));
    let expected: Vec<String> = modules.iter().map(|module| format!("gallery-{module}")).collect();
    prop_assert_eq!(&group.modules, &expected);
  }

  #[test]
  fn short_names_match_full_names(version in version(), modules in modules()) {
    let modules = modules.join(",");
    for kind in GroupKind::ALL {
      let full = format!("/{kind}+{version}+{modules}.js");
      let short = format!("/{}+{version}+{modules}.js", &kind.as_str()[..1]);
      prop_assert_eq!(decode_path(&full), decode_path(&short));
    }
  }

  #[test]
  fn four_part_groups_are_rejected(
    parts in proptest::collection::vec("[a-z0-9]{1,6}", 4..7),
  ) {
    let path = format!("/{}.js", parts.join("+"));
    let is_malformed = matches!(
      decode_path(&path),
      Err(DecodeError::MalformedGroupToken { .. })
    );
    prop_assert!(is_malformed);
  }
}
