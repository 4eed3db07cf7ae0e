//! The fixed C runtime prelude, prepended verbatim to every emitted
//! program. It defines the unsigned 64-bit word alias and the two
//! built-in I/O functions under their mangled names, so the body text
//! this crate emits can call `_ssharp_write`/`_ssharp_read` like any
//! other function.

pub const PRELUDE: &str = "#include <stdio.h>\n\
#include <stdint.h>\n\
\n\
typedef uint64_t u;\n\
\n\
u _ssharp_write(u _input) {\n\
\t printf(\"%lu\\n\", _input);\n\
}\n\
u _ssharp_read() {\n\
\tu _tmp;\n\
\tscanf(\"%lu\", &_tmp);\n\
\treturn _tmp;\n\
}\n";
