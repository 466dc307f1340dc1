/*!

This crate is used to write out the YAML representation of the Redis Enterprise CRDs as they are
modeled in the `redis-enterprise-model` crate, to `deploy/redis-enterprise-crds.yaml`.
The provider does not need the file, but it comes in handy for installing the CRDs into a test
cluster and for comparing the model with the operator's own definitions.

This `lib.rs` file is intentionally empty as `yamlgen` provides a `build.rs` that is invoked during
builds of other crates that specify `yamlgen` as a `build-dependency`.

!*/
