//! Embedded GLSL sources for the supershape program.
//!
//! The two stages are a matched pair: attribute and uniform names here must
//! stay in sync with the uploads in `scene`, and the lighting math is part
//! of the external contract — do not "clean it up".

/// Vertex stage: object-space position through model/view/projection, with
/// the normal carried through the normal matrix.
pub const VERTEX_SHADER: &str = r#"
  attribute vec4 aPos;
  attribute vec3 aNormal;

  uniform mat4 modelMat;
  uniform mat4 viewMat;
  uniform mat4 projMat;
  uniform mat4 normalMat;

  varying vec4 vPos;
  varying vec3 vNormal;

  void main() {
    vPos = modelMat * aPos;
    vNormal = mat3(normalMat) * aNormal;
    gl_Position = projMat * viewMat * vPos;
  }
"#;

/// Fragment stage: Blinn-Phong terms under a narrow spotlight cone with
/// smoothstep edge falloff and quadratic distance attenuation.
pub const FRAGMENT_SHADER: &str = r#"
  precision mediump float;

  struct Material {
    vec3 ambient;
    vec3 diffuse;
    vec3 specular;
    float shininess;
  };

  struct Light {
    vec4 position;
    vec3 direction;
    vec3 ambient;
    vec3 diffuse;
    vec3 specular;

    float cutOff;
    float outerCutOff;
    float constant;
    float linear;
    float quadratic;
  };

  varying vec4 vPos;
  varying vec3 vNormal;

  uniform vec3 camera;
  uniform Light light;
  uniform Material material;

  void main() {
    vec3 normal = normalize(vNormal);
    vec3 pos = vPos.xyz;

    vec4 lightPos = light.position;

    vec3 ambient = light.ambient * material.ambient;

    vec3 surfaceToLight = normalize(lightPos.xyz - pos);

    float theta = dot(normalize(light.direction), surfaceToLight);
    float intensity = smoothstep(light.outerCutOff, light.cutOff, theta);

    vec3 lightDir = normalize(lightPos.w > 0. ? lightPos.xyz - pos : lightPos.xyz);
    vec3 diffuse = max(dot(normal, lightDir), 0.) * light.diffuse * material.diffuse;

    vec3 h = normalize(lightDir + normalize(camera - pos));
    vec3 specular = pow(max(dot(normal, h), 0.), material.shininess) * light.specular * material.specular;

    diffuse *= intensity;
    specular *= intensity;

    float distance = length(lightPos.xyz - pos);
    float attenuation = 1. / (light.constant + light.linear * distance + light.quadratic * (distance * distance));

    gl_FragColor = vec4((ambient + diffuse + specular) * attenuation, 1.);
  }
"#;
