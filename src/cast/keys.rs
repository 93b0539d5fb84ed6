//! Output field names.
//!
//! Every key the casting layer emits, as a named constant. These are a
//! stable external contract: consumers parse them, and renaming any one
//! of them is a breaking change.

pub const VERSION: &str = "_version";
pub const METADATA: &str = "metadata";
pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const ELEMENT: &str = "element";
pub const RESOURCE_GROUPS: &str = "resourceGroups";
pub const CONTENT: &str = "content";
pub const ATTRIBUTES: &str = "attributes";
pub const CLASS: &str = "class";
pub const ROLE: &str = "role";

pub const RESOURCES: &str = "resources";
pub const URI_TEMPLATE: &str = "uriTemplate";
pub const MODEL: &str = "model";
pub const PARAMETERS: &str = "parameters";
pub const ACTIONS: &str = "actions";
pub const METHOD: &str = "method";
pub const RELATION: &str = "relation";
pub const EXAMPLES: &str = "examples";
pub const REQUESTS: &str = "requests";
pub const RESPONSES: &str = "responses";

pub const REFERENCE: &str = "reference";
pub const ID: &str = "id";
pub const HEADERS: &str = "headers";
pub const BODY: &str = "body";
pub const SCHEMA: &str = "schema";

pub const TYPE: &str = "type";
pub const REQUIRED: &str = "required";
pub const DEFAULT: &str = "default";
pub const EXAMPLE: &str = "example";
pub const VALUES: &str = "values";
pub const VALUE: &str = "value";

pub const LITERAL: &str = "literal";
pub const VARIABLE: &str = "variable";
pub const TYPE_DEFINITION: &str = "typeDefinition";
pub const TYPE_SPECIFICATION: &str = "typeSpecification";
pub const NESTED_TYPES: &str = "nestedTypes";
pub const VALUE_DEFINITION: &str = "valueDefinition";
pub const SECTIONS: &str = "sections";
