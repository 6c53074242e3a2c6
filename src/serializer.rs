use crate::{BareItem, Dictionary, InnerList, Item, List, Parameters};

/// Serializes a structured field value into its canonical textual form.
///
/// Serialization cannot fail: every `BareItem`, `Key`, and container
/// invariant is validated at construction time, so any value that exists in
/// memory already has exactly one canonical textual representation.
pub trait SerializeValue {
    /// Serializes `self` into its canonical textual form.
    /// # Examples
    /// ```
    /// # use sfv::{parse_list, SerializeValue};
    ///
    /// let parsed_list_field = parse_list("\"london\", \t\t\"berlin\"".as_bytes()).unwrap();
    ///
    /// assert_eq!(
    ///     parsed_list_field.serialize_value(),
    ///     "\"london\", \"berlin\""
    /// );
    /// ```
    fn serialize_value(&self) -> String;
}

impl SerializeValue for Dictionary {
    fn serialize_value(&self) -> String {
        self.to_http_value()
    }
}

impl SerializeValue for List {
    fn serialize_value(&self) -> String {
        self.to_http_value()
    }
}

impl SerializeValue for Item {
    fn serialize_value(&self) -> String {
        self.to_http_value()
    }
}

/// Container serialization functions.
pub(crate) struct Serializer;

impl Serializer {
    pub(crate) fn serialize_item(input_item: &Item, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-item
        input_item.bare_item.write(output);
        Self::serialize_parameters(&input_item.params, output);
    }

    pub(crate) fn serialize_list(input_list: &List, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-list
        let len = input_list.len();
        for (idx, member) in input_list.iter().enumerate() {
            match member {
                crate::ListEntry::Item(item) => Self::serialize_item(item, output),
                crate::ListEntry::InnerList(inner_list) => {
                    Self::serialize_inner_list(inner_list, output)
                }
            };

            if idx < len - 1 {
                output.push_str(", ");
            }
        }
    }

    pub(crate) fn serialize_dict(input_dict: &Dictionary, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-dictionary
        let len = input_dict.len();
        for (idx, (member_name, member_value)) in input_dict.iter().enumerate() {
            Self::serialize_key(member_name, output);

            match member_value {
                crate::ListEntry::Item(item) => {
                    // A dict member whose value is Boolean true serializes as
                    // just its parameters; any other value serializes in full.
                    if item.bare_item == BareItem::Boolean(true.into()) {
                        Self::serialize_parameters(&item.params, output);
                    } else {
                        output.push('=');
                        Self::serialize_item(item, output);
                    }
                }
                crate::ListEntry::InnerList(inner_list) => {
                    output.push('=');
                    Self::serialize_inner_list(inner_list, output);
                }
            }

            if idx < len - 1 {
                output.push_str(", ");
            }
        }
    }

    fn serialize_inner_list(input_inner_list: &InnerList, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-innerlist
        let items = &input_inner_list.items;

        output.push('(');
        for (idx, item) in items.iter().enumerate() {
            Self::serialize_item(item, output);
            if idx < items.len() - 1 {
                output.push(' ');
            }
        }
        output.push(')');
        Self::serialize_parameters(&input_inner_list.params, output);
    }

    pub(crate) fn serialize_parameters(input_params: &Parameters, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-params
        for (param_name, param_value) in input_params.iter() {
            Self::serialize_parameter(param_name, &param_value.to_ref_bare_item(), output);
        }
    }

    fn serialize_parameter(
        name: &str,
        value: &crate::ref_serializer::RefBareItem,
        output: &mut String,
    ) {
        output.push(';');
        Self::serialize_key(name, output);

        if value != &crate::ref_serializer::RefBareItem::Boolean(true) {
            output.push('=');
            value.write(output);
        }
    }

    fn serialize_key(input_key: &str, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-key
        //
        // Keys reaching this point were already validated by `Key`'s
        // constructor; this is a direct write, not a re-validation.
        output.push_str(input_key);
    }
}
