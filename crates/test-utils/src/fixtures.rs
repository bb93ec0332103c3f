//! Introspection result fixtures.
//!
//! Both fixtures carry the wire members a real server reports
//! (`isDeprecated`, `interfaces`, null placeholders for absent payloads) so
//! tests exercise deserialization against realistic responses, not
//! hand-minimized ones.

/// Introspection result for a minimal todo schema:
///
/// ```graphql
/// type Query {
///     todos: [Todo!]!
/// }
///
/// type Todo {
///     id: ID!
///     text: String!
///     done: Boolean
/// }
/// ```
///
/// Includes the built-in scalar definitions a server reports and one
/// `__`-prefixed meta-type, so internals filtering is observable.
pub const TODO_SCHEMA_INTROSPECTION: &str = r#"{
  "__schema": {
    "queryType": { "name": "Query" },
    "mutationType": null,
    "subscriptionType": null,
    "types": [
      {
        "kind": "OBJECT",
        "name": "Query",
        "description": null,
        "fields": [
          {
            "name": "todos",
            "description": "All todos",
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": { "kind": "OBJECT", "name": "Todo", "ofType": null }
                }
              }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "OBJECT",
        "name": "Todo",
        "description": "A todo item",
        "fields": [
          {
            "name": "id",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "text",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "done",
            "description": null,
            "args": [],
            "type": { "kind": "SCALAR", "name": "Boolean", "ofType": null },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "ID",
        "description": "The ID scalar type represents a unique identifier.",
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "String",
        "description": "The String scalar type represents textual data.",
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "Boolean",
        "description": "The Boolean scalar type represents true or false.",
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "OBJECT",
        "name": "__Schema",
        "description": "A GraphQL schema describing the server's capabilities.",
        "fields": [
          {
            "name": "types",
            "description": "A list of all types supported by this server.",
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": { "kind": "OBJECT", "name": "__Type", "ofType": null }
                }
              }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      }
    ]
  }
}"#;

/// Introspection result for a store schema with custom root-type names:
///
/// ```graphql
/// schema {
///     query: RootQuery
///     mutation: RootMutation
/// }
///
/// type RootQuery {
///     orders(filter: OrderFilter, limit: Int! = 10): [Order!]!
///     defaultStatus: OrderStatus
///     version(detail: Boolean): String!
/// }
///
/// type RootMutation {
///     createOrder(input: CreateOrderInput!): Order!
/// }
///
/// type Order {
///     id: ID!
///     status: OrderStatus!
///     note: String
///     related: [Order]
///     placedAt: DateTime!
/// }
///
/// input CreateOrderInput {
///     note: String
///     status: OrderStatus!
/// }
///
/// input OrderFilter {
///     status: OrderStatus = OPEN
///     limit: Int = 10
///     tags: [String!]
///     after: DateTime!
/// }
///
/// enum OrderStatus {
///     OPEN
///     CLOSED
/// }
///
/// scalar DateTime
/// interface Node
/// union SearchResult = Order
/// ```
///
/// Exercises root renaming, enum and input-object translation, default
/// values, a self-referential type, a custom scalar, and the interface and
/// union fallbacks.
pub const STORE_SCHEMA_INTROSPECTION: &str = r#"{
  "__schema": {
    "queryType": { "name": "RootQuery" },
    "mutationType": { "name": "RootMutation" },
    "subscriptionType": null,
    "types": [
      {
        "kind": "OBJECT",
        "name": "RootQuery",
        "description": "Entry points for reading store data",
        "fields": [
          {
            "name": "orders",
            "description": "Orders matching a filter",
            "args": [
              {
                "name": "filter",
                "description": null,
                "type": { "kind": "INPUT_OBJECT", "name": "OrderFilter", "ofType": null },
                "defaultValue": null
              },
              {
                "name": "limit",
                "description": "Upper bound on returned orders",
                "type": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": { "kind": "SCALAR", "name": "Int", "ofType": null }
                },
                "defaultValue": "10"
              }
            ],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": {
                "kind": "LIST",
                "name": null,
                "ofType": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": { "kind": "OBJECT", "name": "Order", "ofType": null }
                }
              }
            },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "defaultStatus",
            "description": null,
            "args": [],
            "type": { "kind": "ENUM", "name": "OrderStatus", "ofType": null },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "version",
            "description": "Server build identifier",
            "args": [
              {
                "name": "detail",
                "description": null,
                "type": { "kind": "SCALAR", "name": "Boolean", "ofType": null },
                "defaultValue": null
              }
            ],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "OBJECT",
        "name": "RootMutation",
        "description": null,
        "fields": [
          {
            "name": "createOrder",
            "description": "Creates a new order",
            "args": [
              {
                "name": "input",
                "description": null,
                "type": {
                  "kind": "NON_NULL",
                  "name": null,
                  "ofType": { "kind": "INPUT_OBJECT", "name": "CreateOrderInput", "ofType": null }
                },
                "defaultValue": null
              }
            ],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "OBJECT", "name": "Order", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "OBJECT",
        "name": "Order",
        "description": null,
        "fields": [
          {
            "name": "id",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "status",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "ENUM", "name": "OrderStatus", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "note",
            "description": null,
            "args": [],
            "type": { "kind": "SCALAR", "name": "String", "ofType": null },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "related",
            "description": "Orders sharing at least one tag",
            "args": [],
            "type": {
              "kind": "LIST",
              "name": null,
              "ofType": { "kind": "OBJECT", "name": "Order", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          },
          {
            "name": "placedAt",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "DateTime", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "INPUT_OBJECT",
        "name": "CreateOrderInput",
        "description": null,
        "fields": null,
        "inputFields": [
          {
            "name": "note",
            "description": null,
            "type": { "kind": "SCALAR", "name": "String", "ofType": null },
            "defaultValue": null
          },
          {
            "name": "status",
            "description": null,
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "ENUM", "name": "OrderStatus", "ofType": null }
            },
            "defaultValue": null
          }
        ],
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "INPUT_OBJECT",
        "name": "OrderFilter",
        "description": "Criteria for narrowing an order listing",
        "fields": null,
        "inputFields": [
          {
            "name": "status",
            "description": null,
            "type": { "kind": "ENUM", "name": "OrderStatus", "ofType": null },
            "defaultValue": "OPEN"
          },
          {
            "name": "limit",
            "description": null,
            "type": { "kind": "SCALAR", "name": "Int", "ofType": null },
            "defaultValue": "10"
          },
          {
            "name": "tags",
            "description": null,
            "type": {
              "kind": "LIST",
              "name": null,
              "ofType": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
              }
            },
            "defaultValue": null
          },
          {
            "name": "after",
            "description": null,
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "DateTime", "ofType": null }
            },
            "defaultValue": null
          }
        ],
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "ENUM",
        "name": "OrderStatus",
        "description": "Lifecycle of an order",
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": [
          { "name": "OPEN", "description": null, "isDeprecated": false, "deprecationReason": null },
          { "name": "CLOSED", "description": "No longer accepting changes", "isDeprecated": false, "deprecationReason": null }
        ],
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "DateTime",
        "description": "ISO-8601 timestamp",
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "Int",
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "String",
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "ID",
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "SCALAR",
        "name": "Boolean",
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": null
      },
      {
        "kind": "INTERFACE",
        "name": "Node",
        "description": "An object with a globally unique ID",
        "fields": [
          {
            "name": "id",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": [
          { "kind": "OBJECT", "name": "Order", "ofType": null }
        ]
      },
      {
        "kind": "UNION",
        "name": "SearchResult",
        "description": null,
        "fields": null,
        "inputFields": null,
        "interfaces": null,
        "enumValues": null,
        "possibleTypes": [
          { "kind": "OBJECT", "name": "Order", "ofType": null }
        ]
      },
      {
        "kind": "OBJECT",
        "name": "__Schema",
        "description": "A GraphQL schema describing the server's capabilities.",
        "fields": [
          {
            "name": "queryType",
            "description": null,
            "args": [],
            "type": {
              "kind": "NON_NULL",
              "name": null,
              "ofType": { "kind": "OBJECT", "name": "__Type", "ofType": null }
            },
            "isDeprecated": false,
            "deprecationReason": null
          }
        ],
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
      }
    ]
  }
}"#;
